mod argument;
mod generate;
mod health;
mod history;
mod plan;
mod refine;
mod website;

pub use argument::*;
pub use generate::*;
pub use health::*;
pub use history::*;
pub use plan::*;
pub use refine::*;
pub use website::*;

use axum::Json;
use serde::Serialize;

/// Success half of the uniform action envelope.
#[derive(Debug, Serialize)]
pub struct ActionSuccess<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ActionSuccess<T> {
    pub fn json(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}
