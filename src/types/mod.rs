pub mod meal_plan;
pub mod nutrition;
pub mod profile;

pub use meal_plan::*;
pub use nutrition::*;
pub use profile::*;
