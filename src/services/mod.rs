pub mod cache;
pub mod kv_store;
pub mod metrics;
pub mod profile_store;
pub mod validation;

pub use cache::Cache;
pub use kv_store::KvStore;
pub use metrics::BmiCategory;
pub use profile_store::{ProfileStore, DEVICE_ID_KEY, PROFILE_KEY};
pub use validation::{FieldErrors, PreferenceConflict};
