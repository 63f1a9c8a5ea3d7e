//! Error types for coaching calculations.

use thiserror::Error;

/// Errors returned by the calculation services.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A numeric precondition was violated (non-positive weight, height, reps, ...).
    #[error("invalid argument `{name}`: {value}")]
    InvalidArgument { name: &'static str, value: f64 },
}

impl CalcError {
    pub fn invalid(name: &'static str, value: impl Into<f64>) -> Self {
        CalcError::InvalidArgument { name, value: value.into() }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

/// Reject zero, negative and non-finite values.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive_accepts_positive() {
        assert_eq!(ensure_positive("weight", 70.0), Ok(70.0));
    }

    #[test]
    fn test_ensure_positive_rejects_zero_negative_nan() {
        assert!(ensure_positive("weight", 0.0).is_err());
        assert!(ensure_positive("weight", -1.0).is_err());
        assert!(ensure_positive("weight", f64::NAN).is_err());
        assert!(ensure_positive("weight", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_message_names_argument() {
        let err = CalcError::invalid("height", 0.0);
        assert_eq!(err.to_string(), "invalid argument `height`: 0");
    }
}
