//! Boatplans CLI
//!
//! Command-line surface over the catalog engine. Results are printed
//! as JSON on stdout; logs go to stderr.
//!
//! Commands:
//! - size <value>: clean a raw size to millimetres and humanize it
//! - area <value>: clean a raw area to square metres and humanize it
//! - weight <value>: clean a raw weight to grams
//! - bucket <millimetres>: navigation bucket for a canonical length
//! - site-info: site navigation over the built-in demo store
//! - recent: recent-designs feed over the built-in demo store
//!
//! Configuration comes from the environment: SITE_NAME,
//! MEASUREMENT_SYSTEM (metric|imperial) and LEGACY_URLS.

use std::env;
use std::process::ExitCode;

use boatplans::{Catalog, SiteConfig};
use boatplans_catalog::{bucket_for_length, Design, Designer, MemoryStore, Propulsion};
use boatplans_core::{CatalogError, EchoTranslator, Length, RawMeasure};
use boatplans_units::{
    clean_area, clean_size, clean_weight, humanize_imperial_area, humanize_imperial_size,
    humanize_metric_area, humanize_metric_size,
};
use serde_json::{json, Value as JsonValue};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: boatplans-cli <size|area|weight> <value>
       boatplans-cli bucket <millimetres>
       boatplans-cli site-info
       boatplans-cli recent";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<String, CatalogError> {
    let config = SiteConfig::from_env()?;
    let command = match args.first() {
        Some(command) => command.as_str(),
        None => {
            return Err(CatalogError::validation_error("missing command").with_suggestion(USAGE))
        }
    };
    debug!(command, "dispatching");

    let output = match command {
        "size" => clean_size_command(arg_value(args)?)?,
        "area" => clean_area_command(arg_value(args)?)?,
        "weight" => clean_weight_command(arg_value(args)?)?,
        "bucket" => bucket_command(&config, arg_value(args)?)?,
        "site-info" => {
            let catalog = Catalog::new(demo_store(), config);
            serde_json::to_value(catalog.site_info()?).map_err(internal)?
        }
        "recent" => {
            let catalog = Catalog::new(demo_store(), config);
            serde_json::to_value(catalog.recent_designs()?).map_err(internal)?
        }
        other => {
            return Err(CatalogError::validation_error(format!(
                "unknown command `{}`",
                other
            ))
            .with_suggestion(USAGE));
        }
    };

    serde_json::to_string_pretty(&output).map_err(internal)
}

fn arg_value(args: &[String]) -> Result<&str, CatalogError> {
    args.get(1)
        .map(String::as_str)
        .ok_or_else(|| CatalogError::validation_error("missing value").with_suggestion(USAGE))
}

fn internal(err: serde_json::Error) -> CatalogError {
    CatalogError::validation_error(format!("cannot encode output: {}", err))
}

fn clean_size_command(value: &str) -> Result<JsonValue, CatalogError> {
    let size = clean_size(&RawMeasure::from(value))?;
    let tr = EchoTranslator;
    Ok(json!({
        "millimetres": size.as_mm(),
        "metric": humanize_metric_size(Some(size), &tr),
        "imperial": humanize_imperial_size(Some(size), &tr),
    }))
}

fn clean_area_command(value: &str) -> Result<JsonValue, CatalogError> {
    let area = clean_area(&RawMeasure::from(value))?;
    let tr = EchoTranslator;
    Ok(json!({
        "square_metres": area.to_string(),
        "metric": humanize_metric_area(Some(area), &tr),
        "imperial": humanize_imperial_area(Some(area), &tr),
    }))
}

fn clean_weight_command(value: &str) -> Result<JsonValue, CatalogError> {
    let weight = clean_weight(&RawMeasure::from(value))?;
    Ok(json!({ "grams": weight.as_g() }))
}

fn bucket_command(config: &SiteConfig, value: &str) -> Result<JsonValue, CatalogError> {
    let mm: u64 = value
        .parse()
        .map_err(|_| CatalogError::parse_error(format!("`{}` is not whole millimetres", value)))?;
    let system = config.measurement_system;
    let bucket = bucket_for_length(system, Length::from_mm(mm));
    let tr = EchoTranslator;
    Ok(json!({
        "from": bucket.from,
        "to": bucket.to,
        "slug": bucket.slug(system),
        "label": bucket.label(system, &tr),
    }))
}

/// A small catalog of well-known dinghy designs for demos
fn demo_store() -> MemoryStore {
    let welsford = Designer::new("welsford", "John Welsford");
    let oughtred = Designer::new("oughtred", "Iain Oughtred");

    let mut scamp = Design::new("scamp", "SCAMP", welsford.clone(), "sail").with_loa(3580);
    scamp.tiny_description = "pocket cruiser".to_string();

    let mut navigator = Design::new("navigator", "Navigator", welsford.clone(), "sail").with_loa(4500);
    navigator.tiny_description = "open water dinghy".to_string();

    let mut elf = Design::new("elf", "Elf", oughtred.clone(), "row").with_loa(2400);
    elf.tiny_description = "light rowing skiff".to_string();

    let mut whilly = Design::new("whilly-boat", "Whilly Boat", oughtred, "sail").with_loa(4270);
    whilly.tiny_description = "norse-lined daysailer".to_string();

    let mut joansa = Design::new("joansa", "Joansa", welsford, "row").with_loa(4650);
    joansa.tiny_description = "fast touring rowboat".to_string();

    MemoryStore::new()
        .with_propulsion(Propulsion::new("row", "row", "Rowboats", 1))
        .with_propulsion(Propulsion::new("sail", "sail", "Sailboats", 2))
        .with_design(scamp)
        .with_design(navigator)
        .with_design(elf)
        .with_design(whilly)
        .with_design(joansa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_command_output() {
        let out = clean_size_command("1 ft 1/2 in").unwrap();
        assert_eq!(out["millimetres"], 318);
        assert_eq!(out["imperial"], "1' 1\"");
    }

    #[test]
    fn test_weight_command_output() {
        let out = clean_weight_command("100 lbs").unwrap();
        assert_eq!(out["grams"], 45359);
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        let err = run(&["frobnicate".to_string()]).unwrap_err();
        assert!(err.message.contains("unknown command"));
    }

    #[test]
    fn test_demo_store_feeds_site_info() {
        let catalog = Catalog::new(demo_store(), SiteConfig::default());
        let info = catalog.site_info().unwrap();
        assert_eq!(info.propulsions.len(), 2);
        assert!(!info.propulsions[0].lengths.is_empty());
    }
}
