//! Chebyshev (equiripple) prototype.
//!
//! Element values follow the classic recurrence:
//!
//! ```text
//! beta  = ln(coth(Lr / 17.37))
//! gamma = sinh(beta / 2n)
//! a_k   = sin((2k - 1) pi / 2n)
//! b_k   = gamma^2 + sin^2(k pi / n)
//! g_1   = 2 a_1 / gamma
//! g_k   = 4 a_(k-1) a_k / (b_(k-1) g_(k-1))
//! ```
//!
//! Each g_k depends on g_(k-1), so the values are built strictly left to
//! right.

use std::f64::consts::PI;

use crate::error::{FilterError, Result};
use crate::filter::FilterFamily;

use super::{PrototypeValues, MAX_ORDER};

/// Ripple-to-neper scaling used by the recurrence (40 / ln 10, rounded).
const RIPPLE_SCALE_DB: f64 = 17.37;

/// Compute Chebyshev g-values for `ripple_db` of passband ripple.
pub fn chebyshev(order: usize, ripple_db: f64) -> Result<PrototypeValues> {
    if !FilterFamily::Chebyshev.order_range().contains(&order) {
        return Err(FilterError::unsupported_order(FilterFamily::Chebyshev, order));
    }
    if !ripple_db.is_finite() || ripple_db <= 0.0 {
        return Err(FilterError::InvalidRipple { ripple_db });
    }

    let n = order as f64;

    let rr = ripple_db / RIPPLE_SCALE_DB;
    let e2x = (2.0 * rr).exp();
    let coth = (e2x + 1.0) / (e2x - 1.0);
    let beta = coth.ln();
    let gamma = (beta / (2.0 * n)).sinh();

    // Index 0 unused so the arrays read like the 1-based recurrence
    let mut a = [0.0; MAX_ORDER + 1];
    let mut b = [0.0; MAX_ORDER + 1];
    let mut g = [0.0; MAX_ORDER + 1];

    for i in 1..=order {
        let k = i as f64;
        a[i] = ((2.0 * k - 1.0) * PI / (2.0 * n)).sin();
        b[i] = gamma.powi(2) + (PI * k / n).sin().powi(2);
    }

    g[1] = 2.0 * a[1] / gamma;
    for i in 2..=order {
        g[i] = (4.0 * a[i - 1] * a[i]) / (b[i - 1] * g[i - 1]);
    }

    Ok(PrototypeValues::from_slice(&g[1..=order]))
}
