//! Spec validation.

use crate::error::{FilterError, Result};

use super::FilterSpec;

/// Validate a spec before any prototype math runs.
///
/// Checks:
/// - Cutoff frequency is positive and finite
/// - Impedance is positive and finite
/// - Order is within the family's range
/// - Ripple is positive and finite, for Chebyshev only
pub fn validate_spec(spec: &FilterSpec) -> Result<()> {
    if !is_positive(spec.cutoff_hz) {
        return Err(FilterError::InvalidFrequency { hz: spec.cutoff_hz });
    }

    if !is_positive(spec.impedance_ohms) {
        return Err(FilterError::InvalidImpedance {
            ohms: spec.impedance_ohms,
        });
    }

    if !spec.family.order_range().contains(&spec.order) {
        return Err(FilterError::unsupported_order(spec.family, spec.order));
    }

    if spec.family.uses_ripple() && !is_positive(spec.ripple_db) {
        return Err(FilterError::InvalidRipple {
            ripple_db: spec.ripple_db,
        });
    }

    Ok(())
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterFamily;

    fn spec(family: FilterFamily) -> FilterSpec {
        FilterSpec::new(family, 5, 10e6, 50.0)
    }

    #[test]
    fn test_valid_specs_pass() {
        for family in FilterFamily::ALL {
            assert!(validate_spec(&spec(family)).is_ok());
        }
    }

    #[test]
    fn test_rejects_non_positive_frequency() {
        for hz in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let s = FilterSpec { cutoff_hz: hz, ..spec(FilterFamily::Butterworth) };
            assert!(matches!(validate_spec(&s), Err(FilterError::InvalidFrequency { .. })));
        }
    }

    #[test]
    fn test_rejects_non_positive_impedance() {
        let s = FilterSpec { impedance_ohms: 0.0, ..spec(FilterFamily::Bessel) };
        assert!(matches!(validate_spec(&s), Err(FilterError::InvalidImpedance { .. })));
    }

    #[test]
    fn test_order_range_per_family() {
        let s = FilterSpec { order: 11, ..spec(FilterFamily::Chebyshev) };
        assert!(validate_spec(&s).is_ok());

        let s = FilterSpec { order: 11, ..spec(FilterFamily::Butterworth) };
        assert!(matches!(
            validate_spec(&s),
            Err(FilterError::UnsupportedOrder { order: 11, min: 2, max: 9, .. })
        ));

        for order in [0, 1, 15] {
            let s = FilterSpec { order, ..spec(FilterFamily::Chebyshev) };
            assert!(matches!(validate_spec(&s), Err(FilterError::UnsupportedOrder { .. })));
        }
    }

    #[test]
    fn test_ripple_checked_only_for_chebyshev() {
        let s = spec(FilterFamily::Chebyshev).with_ripple(0.0);
        assert!(matches!(validate_spec(&s), Err(FilterError::InvalidRipple { .. })));

        let s = spec(FilterFamily::Butterworth).with_ripple(-3.0);
        assert!(validate_spec(&s).is_ok());
    }
}
