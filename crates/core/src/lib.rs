pub mod domain;
mod error;
pub mod format;
pub mod validate;

pub use domain::*;
pub use error::ValidationError;
