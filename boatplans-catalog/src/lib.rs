//! Boatplans Catalog - Model, Store Seam, and Length Bucketing
//!
//! Domain value types for the boat catalog, the narrow record-store
//! interface the engine queries through, and the fixed length-range
//! buckets used for navigation.

mod model;
mod store;
mod buckets;

pub use model::{Design, Designer, EngineType, HullType, Propulsion};
pub use store::{DesignStore, MemoryStore, StoreError};
pub use buckets::{
    available_buckets, bucket_for_length, bucket_multiplier, buckets_for, LengthBucket,
    FALLBACK_BUCKET, IMPERIAL_BUCKETS, METRIC_BUCKETS,
};
