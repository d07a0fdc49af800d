//! Filter descriptions, validation and the design engine.
//!
//! A [`FilterSpec`] names the family, order, cutoff, impedance and ripple.
//! [`design`] validates it, generates the normalized prototype for the
//! family and scales it into a [`FilterResult`] of Pi-ladder components.

mod engine;
mod types;
mod validate;

pub use engine::design;
pub use types::*;
pub use validate::validate_spec;
