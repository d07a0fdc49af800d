//! Bessel (maximally flat group delay) prototype.
//!
//! There is no simple closed form for Bessel ladder elements, so values
//! come from a table. Entries are normalized to a 3 dB cutoff of 1 rad/s
//! with equal 1 Ohm terminations, listed from the source end.

use crate::error::{FilterError, Result};
use crate::filter::FilterFamily;

use super::PrototypeValues;

/// g1..gn for orders 2 to 9.
const BESSEL_TABLE: [&[f64]; 8] = [
    &[0.5755, 2.1478],
    &[0.3374, 0.9705, 2.2034],
    &[0.2334, 0.6725, 1.0815, 2.2404],
    &[0.1743, 0.5072, 0.8040, 1.1110, 2.2582],
    &[0.1365, 0.4002, 0.6392, 0.8538, 1.1126, 2.2645],
    &[0.1106, 0.3259, 0.5249, 0.7020, 0.8690, 1.1052, 2.2659],
    &[0.0919, 0.2719, 0.4409, 0.5936, 0.7303, 0.8695, 1.0956, 2.2656],
    &[0.0780, 0.2313, 0.3770, 0.5108, 0.6306, 0.7407, 0.8639, 1.0863, 2.2649],
];

/// Look up Bessel g-values for `order`.
pub fn bessel(order: usize) -> Result<PrototypeValues> {
    let range = FilterFamily::Bessel.order_range();
    if !range.contains(&order) {
        return Err(FilterError::unsupported_order(FilterFamily::Bessel, order));
    }

    Ok(PrototypeValues::from_slice(BESSEL_TABLE[order - range.start()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_table_shape() {
        for order in 2..=9 {
            let proto = bessel(order).unwrap();
            assert_eq!(proto.order(), order);
            assert!(proto.iter().all(|g| g > 0.0));
            // Elements grow toward the load end
            assert!(proto.as_slice().windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_second_order_matches_polynomial() {
        // A doubly terminated C-L section realizes 1 / (LC s^2 + (L+C) s + 2).
        // Matching 3 / (s^2 + 3s + 3) at unit delay gives LC = 2/3 and
        // L + C = 2, then both scale by the 3 dB frequency 1.3617.
        let proto = bessel(2).unwrap();
        let w3 = 1.3617;
        assert_relative_eq!(proto[0] * proto[1], 2.0 / 3.0 * w3 * w3, max_relative = 1e-3);
        assert_relative_eq!(proto[0] + proto[1], 2.0 * w3, max_relative = 1e-3);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            bessel(10),
            Err(FilterError::UnsupportedOrder { min: 2, max: 9, .. })
        ));
        assert!(bessel(0).is_err());
    }
}
