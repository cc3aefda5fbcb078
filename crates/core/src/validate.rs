//! Shared field-level validation helpers.
//!
//! Lengths are counted in Unicode scalar values so multi-byte input is not
//! penalized by its UTF-8 encoding.

use crate::error::ValidationError;

pub fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();

    if actual < min {
        return Err(ValidationError::TooShort { field, min, actual });
    }
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }

    Ok(())
}

pub fn check_not_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_within_bounds() {
        assert!(check_length("idea", "a personal finance app", 10, 1000).is_ok());
    }

    #[test]
    fn test_length_too_short() {
        let err = check_length("idea", "hi", 10, 1000).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooShort {
                field: "idea",
                min: 10,
                actual: 2
            }
        );
    }

    #[test]
    fn test_length_too_long() {
        let long = "x".repeat(1001);
        let err = check_length("idea", &long, 10, 1000).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { actual: 1001, .. }));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 11 scalar values, 33 bytes
        assert!(check_length("idea", "ていねいなアイデアです", 10, 1000).is_ok());
    }

    #[test]
    fn test_not_empty() {
        assert!(check_not_empty("prompt", "text").is_ok());
        assert!(check_not_empty("prompt", "   ").is_err());
    }
}
