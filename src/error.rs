//! Error types for the Pi low-pass filter calculator.
//!
//! This module provides a unified error type [`FilterError`] covering
//! input parsing, spec validation and report rendering.

use thiserror::Error;

use crate::filter::FilterFamily;

/// Result type alias using [`FilterError`].
pub type Result<T> = std::result::Result<T, FilterError>;

/// Unified error type for all filter design operations.
#[derive(Error, Debug)]
pub enum FilterError {
    // ============ Spec Validation Errors ============
    /// Filter family name not recognized
    #[error("Unknown filter family '{name}' (expected butterworth, chebyshev or bessel)")]
    InvalidFilterFamily { name: String },

    /// Order outside the range supported by the family
    #[error("{family} filters support orders {min} to {max}, got {order}")]
    UnsupportedOrder {
        family: FilterFamily,
        order: usize,
        min: usize,
        max: usize,
    },

    /// Chebyshev ripple must be a positive number of decibels
    #[error("Ripple must be positive, got {ripple_db} dB")]
    InvalidRipple { ripple_db: f64 },

    /// Cutoff frequency must be positive and finite
    #[error("Frequency must be positive, got {hz} Hz")]
    InvalidFrequency { hz: f64 },

    /// Impedance must be positive and finite
    #[error("Impedance must be positive, got {ohms} Ohm")]
    InvalidImpedance { ohms: f64 },

    // ============ Boundary Errors ============
    /// A value with a unit suffix could not be parsed
    #[error("Cannot parse '{input}': {message}")]
    InvalidQuantity { input: String, message: String },

    /// JSON report rendering failed
    #[error("Failed to serialize report: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },
}

impl FilterError {
    /// Create an unsupported order error carrying the family's valid range
    pub fn unsupported_order(family: FilterFamily, order: usize) -> Self {
        let range = family.order_range();
        Self::UnsupportedOrder {
            family,
            order,
            min: *range.start(),
            max: *range.end(),
        }
    }

    /// Create an invalid quantity error
    pub fn invalid_quantity(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidQuantity {
            input: input.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for FilterError {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_order_carries_range() {
        match FilterError::unsupported_order(FilterFamily::Chebyshev, 15) {
            FilterError::UnsupportedOrder { order, min, max, .. } => {
                assert_eq!(order, 15);
                assert_eq!(min, 2);
                assert_eq!(max, 11);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_messages() {
        let err = FilterError::unsupported_order(FilterFamily::Bessel, 1);
        assert_eq!(err.to_string(), "Bessel filters support orders 2 to 9, got 1");

        let err = FilterError::invalid_quantity("10XHz", "invalid number");
        assert_eq!(err.to_string(), "Cannot parse '10XHz': invalid number");
    }
}
