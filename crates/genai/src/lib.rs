pub mod client;
pub mod error;
pub mod types;

pub use client::GenAiClient;
pub use error::{GenAiError, Result};
pub use types::*;
