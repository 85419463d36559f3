//! Translation seam
//!
//! Display strings go through an injected `Translate` strategy. The
//! default strategy treats the key itself as the template and fills the
//! params in, so the engine renders deterministic English without a
//! loaded locale catalog.

/// Named parameters passed to a translation call
pub type Params<'a> = &'a [(&'static str, String)];

/// Locale-aware string lookup
pub trait Translate: Send + Sync {
    /// Return the formatted, locale-appropriate string for a template key.
    ///
    /// Params are already rendered to their display form; the
    /// implementation only selects a template and substitutes them.
    fn translate(&self, key: &str, params: Params<'_>) -> String;
}

/// Fallback translator: the key is the template
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoTranslator;

impl Translate for EchoTranslator {
    fn translate(&self, key: &str, params: Params<'_>) -> String {
        interpolate(key, params)
    }
}

/// Substitute `{name}` placeholders in a template.
///
/// Unknown placeholders are left verbatim; an unclosed brace is treated
/// as literal text.
pub fn interpolate(template: &str, params: Params<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match params.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_named_params() {
        let out = interpolate(
            "{size_from}-{size_to} {unit}",
            &[
                ("size_from", "10".to_string()),
                ("size_to", "14".to_string()),
                ("unit", "ft".to_string()),
            ],
        );
        assert_eq!(out, "10-14 ft");
    }

    #[test]
    fn test_interpolate_unknown_placeholder_kept() {
        let out = interpolate("up to {size_to} {unit}", &[("size_to", "10".to_string())]);
        assert_eq!(out, "up to 10 {unit}");
    }

    #[test]
    fn test_interpolate_unclosed_brace_is_literal() {
        let out = interpolate("oops {size", &[("size", "1".to_string())]);
        assert_eq!(out, "oops {size");
    }

    #[test]
    fn test_echo_translator() {
        let tr = EchoTranslator;
        let out = tr.translate("from {size_from} {unit}", &[
            ("size_from", "16".to_string()),
            ("unit", "ft".to_string()),
        ]);
        assert_eq!(out, "from 16 ft");
    }
}
