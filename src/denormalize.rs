//! Frequency and impedance scaling from prototype to physical ladder.
//!
//! With `wc = 2 pi fc` and load impedance `Z0`:
//!
//! ```text
//! shunt C (odd k):   C = g_k / (wc * Z0)
//! series L (even k): L = g_k * Z0 / wc
//! ```
//!
//! Values are left in Farads and Henries. Unit scaling for display lives in
//! [`crate::units`].

use std::f64::consts::PI;

use crate::filter::{Component, ComponentKind};
use crate::prototype::PrototypeValues;

/// Scale a normalized prototype to `cutoff_hz` and `impedance_ohms`.
///
/// The caller validates that both are positive.
pub fn denormalize(prototype: &PrototypeValues, cutoff_hz: f64, impedance_ohms: f64) -> Vec<Component> {
    let omega = 2.0 * PI * cutoff_hz;

    prototype
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let index = i + 1;
            let kind = ComponentKind::at(index);
            let value = match kind {
                ComponentKind::Capacitor => g / (omega * impedance_ohms),
                ComponentKind::Inductor => g * impedance_ohms / omega,
            };
            Component { index, kind, value }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prototype;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_prototype_at_one_radian() {
        // At wc = 1 rad/s and 1 Ohm the values are the g-values themselves
        let proto = prototype::butterworth(3).unwrap();
        let parts = denormalize(&proto, 1.0 / (2.0 * PI), 1.0);
        for (c, g) in parts.iter().zip(proto.iter()) {
            assert_relative_eq!(c.value, g, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_round_trip_recovers_prototype() {
        let proto = prototype::chebyshev(7, 0.25).unwrap();
        let (fc, z0) = (144e6, 75.0);
        let parts = denormalize(&proto, fc, z0);
        assert_eq!(parts.len(), 7);
        for (c, g) in parts.iter().zip(proto.iter()) {
            assert_relative_eq!(c.normalized(fc, z0), g, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_impedance_scaling_direction() {
        let proto = prototype::bessel(4).unwrap();
        let low = denormalize(&proto, 1e6, 50.0);
        let high = denormalize(&proto, 1e6, 100.0);
        // Doubling Z0 halves capacitors and doubles inductors
        assert_relative_eq!(high[0].value, low[0].value / 2.0, max_relative = 1e-12);
        assert_relative_eq!(high[1].value, low[1].value * 2.0, max_relative = 1e-12);
    }
}
