//! Butterworth (maximally flat) prototype.

use std::f64::consts::PI;

use crate::error::{FilterError, Result};
use crate::filter::FilterFamily;

use super::{PrototypeValues, MAX_ORDER};

/// Compute Butterworth g-values: g_k = 2 sin((2k - 1) pi / 2n).
pub fn butterworth(order: usize) -> Result<PrototypeValues> {
    if !FilterFamily::Butterworth.order_range().contains(&order) {
        return Err(FilterError::unsupported_order(FilterFamily::Butterworth, order));
    }

    let n = order as f64;
    let mut g = [0.0; MAX_ORDER];
    for (i, slot) in g.iter_mut().take(order).enumerate() {
        let k = (i + 1) as f64;
        *slot = 2.0 * ((2.0 * k - 1.0) * PI / (2.0 * n)).sin();
    }

    Ok(PrototypeValues::from_slice(&g[..order]))
}
