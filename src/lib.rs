//! # Pi Lowpass
//!
//! Component values for Pi-topology LC low-pass filters.
//!
//! This library provides:
//! - Normalized prototype generators for Butterworth, Chebyshev and Bessel responses
//! - Frequency and impedance scaling into capacitances and inductances
//! - Unit-suffix parsing and display formatting
//! - Text, JSON and CSV reports with an ASCII topology diagram
//!
//! ## Architecture
//!
//! - [`prototype`] - Normalized g-values per filter family
//! - [`denormalize`] - Scaling from prototype to physical ladder
//! - [`filter`] - Filter specs, validation and the design engine
//! - [`units`] - Quantity parsing and formatting
//! - [`report`] - Output rendering
//! - [`logging`] - Stderr logger (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! pi-lowpass -t chebyshev -f 100MHz -z 50 -r 0.5 -n 5
//! ```
//!
//! ### Library
//!
//! ```
//! use pi_lowpass::{design, FilterFamily, FilterSpec};
//!
//! let spec = FilterSpec::new(FilterFamily::Butterworth, 3, 10e6, 50.0);
//! let result = design(&spec).unwrap();
//! assert_eq!(result.components.len(), 3);
//! ```
//!
//! ## Pi Topology
//!
//! The ladder alternates shunt capacitors and series inductors, starting
//! with a capacitor at the source:
//!
//! ```text
//! IN ──┬──L1──┬──L2──┬── OUT
//!      C1     C2     C3
//!      │      │      │
//!     GND    GND    GND
//! ```
//!
//! Element k of a normalized prototype (1 rad/s, 1 Ohm) becomes
//! `C = g/(wc Z0)` for odd k and `L = g Z0/wc` for even k.

pub mod denormalize;
pub mod error;
pub mod filter;
pub mod prototype;
pub mod report;
pub mod units;

#[cfg(feature = "cli")]
pub mod logging;

// Re-export main types for convenience
pub use error::{FilterError, Result};
pub use filter::{design, Component, ComponentKind, FilterFamily, FilterResult, FilterSpec};
pub use prototype::PrototypeValues;

/// Default Chebyshev passband ripple in dB
pub const DEFAULT_RIPPLE_DB: f64 = 0.5;

/// Default number of ladder elements
pub const DEFAULT_ORDER: usize = 3;
