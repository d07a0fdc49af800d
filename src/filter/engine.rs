//! Filter design: validation, prototype selection and denormalization.

use log::{debug, trace};

use crate::denormalize::denormalize;
use crate::error::Result;
use crate::prototype;

use super::{validate_spec, FilterResult, FilterSpec};

/// Design a Pi low-pass filter.
///
/// The spec is validated before any prototype math runs, so a failure
/// never leaves a partial result behind.
pub fn design(spec: &FilterSpec) -> Result<FilterResult> {
    validate_spec(spec)?;

    let proto = prototype::generate(spec.family, spec.order, spec.ripple_db)?;
    debug!(
        "{} order {} prototype: {:?}",
        spec.family,
        spec.order,
        proto.as_slice()
    );

    let components = denormalize(&proto, spec.cutoff_hz, spec.impedance_ohms);
    for c in &components {
        trace!("{}", c);
    }

    Ok(FilterResult {
        spec: *spec,
        components,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use crate::filter::{ComponentKind, FilterFamily};
    use approx::assert_relative_eq;

    #[test]
    fn test_butterworth_third_order_10mhz() {
        let spec = FilterSpec::new(FilterFamily::Butterworth, 3, 10e6, 50.0);
        let result = design(&spec).unwrap();

        assert_eq!(result.components.len(), 3);
        assert_eq!(result.spec, spec);

        let c1 = result.components[0];
        let l1 = result.components[1];
        let c2 = result.components[2];
        assert_eq!(c1.kind, ComponentKind::Capacitor);
        assert_eq!(l1.kind, ComponentKind::Inductor);
        assert_eq!(c2.kind, ComponentKind::Capacitor);

        // C = 1 / (wc * 50), L = 2 * 50 / wc
        assert_relative_eq!(c1.value, 318.31e-12, max_relative = 1e-4);
        assert_relative_eq!(c2.value, c1.value, max_relative = 1e-12);
        assert_relative_eq!(l1.value, 1.59155e-6, max_relative = 1e-4);
    }

    #[test]
    fn test_chebyshev_fifth_order_100mhz() {
        let spec = FilterSpec::new(FilterFamily::Chebyshev, 5, 100e6, 50.0).with_ripple(0.5);
        let result = design(&spec).unwrap();
        let omega = spec.omega();

        let expected = [1.7058, 1.2296, 2.5408, 1.2296, 1.7058];
        for (c, g) in result.components.iter().zip(expected) {
            assert_relative_eq!(c.normalized(spec.cutoff_hz, spec.impedance_ohms), g, max_relative = 2e-4);
        }
        assert_relative_eq!(result.components[0].value, 1.7058 / (omega * 50.0), max_relative = 2e-4);

        // Deterministic across calls
        assert_eq!(design(&spec).unwrap(), result);
    }

    #[test]
    fn test_even_order_ends_on_inductor() {
        let spec = FilterSpec::new(FilterFamily::Bessel, 4, 1e6, 50.0);
        let result = design(&spec).unwrap();
        assert_eq!(result.capacitors().count(), 2);
        assert_eq!(result.inductors().count(), 2);
        assert_eq!(result.components[3].kind, ComponentKind::Inductor);
    }

    #[test]
    fn test_higher_cutoff_shrinks_every_value() {
        for family in FilterFamily::ALL {
            let low = design(&FilterSpec::new(family, 5, 1e6, 50.0)).unwrap();
            let high = design(&FilterSpec::new(family, 5, 2e6, 50.0)).unwrap();
            for (a, b) in low.components.iter().zip(&high.components) {
                assert!(b.value < a.value, "{family} {}", a.designator());
            }
        }
    }

    #[test]
    fn test_invalid_orders_fail() {
        for order in [1, 15] {
            let spec = FilterSpec::new(FilterFamily::Butterworth, order, 10e6, 50.0);
            assert!(matches!(design(&spec), Err(FilterError::UnsupportedOrder { .. })));
        }
    }

    #[test]
    fn test_validation_precedes_generation() {
        // Bad frequency is reported even though the order is also bad
        let spec = FilterSpec::new(FilterFamily::Chebyshev, 40, -1.0, 50.0);
        assert!(matches!(design(&spec), Err(FilterError::InvalidFrequency { .. })));
    }
}
