//! Normalized low-pass prototype generators.
//!
//! A prototype is the list of element values g1..gn of a doubly terminated
//! LC ladder normalized to a cutoff of 1 rad/s and 1 Ohm terminations.
//! Each filter family has its own generator:
//!
//! | Family | Source of g-values |
//! |--------|--------------------|
//! | Butterworth | closed form `2 sin((2k-1)pi/2n)` |
//! | Chebyshev | recurrence over `a_k`, `b_k` and `gamma` |
//! | Bessel | embedded table, orders 2 to 9 |
//!
//! Generators validate their order (and ripple for Chebyshev) and never
//! return a partially filled prototype.

mod bessel;
mod butterworth;
mod chebyshev;

pub use bessel::bessel;
pub use butterworth::butterworth;
pub use chebyshev::chebyshev;

use std::ops::Index;

use crate::error::Result;
use crate::filter::FilterFamily;

/// Largest order any family supports.
pub const MAX_ORDER: usize = 11;

/// Normalized element values g1..gn for one ladder.
///
/// Values are stored in a fixed-capacity array; only the first `order`
/// entries are meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrototypeValues {
    values: [f64; MAX_ORDER],
    order: usize,
}

impl PrototypeValues {
    /// Build a prototype from g1..gn.
    ///
    /// Callers guarantee `values.len() <= MAX_ORDER`; generators check the
    /// order against the family range first.
    pub(crate) fn from_slice(values: &[f64]) -> Self {
        debug_assert!(values.len() <= MAX_ORDER);
        let mut buf = [0.0; MAX_ORDER];
        buf[..values.len()].copy_from_slice(values);
        Self {
            values: buf,
            order: values.len(),
        }
    }

    /// Number of reactive elements.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Element value at 1-based ladder position `k`.
    pub fn g(&self, k: usize) -> Option<f64> {
        if (1..=self.order).contains(&k) {
            Some(self.values[k - 1])
        } else {
            None
        }
    }

    /// g1..gn as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..self.order]
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.as_slice().iter().copied()
    }
}

impl Index<usize> for PrototypeValues {
    type Output = f64;

    /// Zero-based access, matching slice indexing.
    fn index(&self, i: usize) -> &f64 {
        &self.as_slice()[i]
    }
}

/// Generate the prototype for `family`.
///
/// `ripple_db` is read only by Chebyshev.
pub fn generate(family: FilterFamily, order: usize, ripple_db: f64) -> Result<PrototypeValues> {
    match family {
        FilterFamily::Butterworth => butterworth(order),
        FilterFamily::Chebyshev => chebyshev(order, ripple_db),
        FilterFamily::Bessel => bessel(order),
    }
}
