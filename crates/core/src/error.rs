use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be at least {min} characters (got {actual})")]
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field} must be between 0 and {max} (got {actual})")]
    OutOfRange {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("unknown {field}: {value}")]
    UnknownVariant { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ValidationError::TooShort {
            field: "idea",
            min: 10,
            actual: 5,
        };
        assert_eq!(
            error.to_string(),
            "idea must be at least 10 characters (got 5)"
        );
    }
}
