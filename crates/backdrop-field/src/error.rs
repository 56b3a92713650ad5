//! Error types for field construction.

use thiserror::Error;

/// Errors produced when building a field from invalid options.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    /// A tuning value was negative, NaN or infinite.
    #[error("invalid {name}: expected a finite, non-negative number, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A `[min, max)` range had its bounds reversed.
    #[error("invalid range for {name}: min {min} is greater than max {max}")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    /// A palette had no colors to pick from.
    #[error("palette for {0} is empty")]
    EmptyPalette(&'static str),
}

/// Reject negative and non-finite tuning values.
pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<(), FieldError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FieldError::InvalidParameter { name, value })
    }
}

/// Reject ranges with bad bounds.
pub(crate) fn check_range(name: &'static str, min: f64, max: f64) -> Result<(), FieldError> {
    check_non_negative(name, min)?;
    check_non_negative(name, max)?;
    if min > max {
        return Err(FieldError::InvalidRange { name, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_non_negative() {
        assert!(check_non_negative("speed", 0.0).is_ok());
        assert!(check_non_negative("speed", 0.3).is_ok());
        assert_eq!(
            check_non_negative("speed", -1.0),
            Err(FieldError::InvalidParameter {
                name: "speed",
                value: -1.0
            })
        );
        assert!(check_non_negative("speed", f64::NAN).is_err());
        assert!(check_non_negative("speed", f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_range() {
        assert!(check_range("radius", 1.0, 3.0).is_ok());
        assert!(check_range("radius", 2.0, 2.0).is_ok());
        assert_eq!(
            check_range("radius", 3.0, 1.0),
            Err(FieldError::InvalidRange {
                name: "radius",
                min: 3.0,
                max: 1.0
            })
        );
    }

    #[test]
    fn test_error_message_names_parameter() {
        let err = FieldError::InvalidParameter {
            name: "link distance",
            value: -5.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("link distance"), "got: {msg}");
        assert!(msg.contains("-5"), "got: {msg}");
    }
}
