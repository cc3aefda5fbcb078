use promptforge_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    /// Input rejected before any model call was made.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The model call failed or its reply could not be decoded into the
    /// flow's output shape. Never carries a partial result.
    #[error("Generation failed: {0}")]
    Generation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_wraps_cause() {
        let err: FlowError = ValidationError::Empty { field: "prompt" }.into();
        assert_eq!(err.to_string(), "Validation failed: prompt must not be empty");
    }
}
