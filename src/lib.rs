//! BiteTrack - nutrition tracking client core
//!
//! Client-side core for a nutrition-tracking application: the persisted user
//! profile aggregate, derived health metrics, onboarding validation, and
//! typed REST clients for the backend that does the heavy lifting
//! (meal-plan generation, food-image analysis, nutrition estimation).

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use services::{Cache, KvStore, ProfileStore};
pub use types::*;
