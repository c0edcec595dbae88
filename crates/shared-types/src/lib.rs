pub mod error;
pub mod feature_flags;

// Order desk domain
pub mod analytics;
pub mod models;
pub mod order;

pub use error::*;
pub use feature_flags::*;

pub use analytics::*;
pub use models::*;
pub use order::*;
