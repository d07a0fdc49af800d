//! Quantities with unit suffixes.
//!
//! Parsing turns command-line strings such as `10MHz` or `1.5kohm` into
//! base SI values. Formatting picks a display prefix for a value in base
//! units (`318.31 pF`, `1.59 uH`, `10 MHz`).

mod format;
mod parse;

pub use format::{format_capacitance, format_frequency, format_inductance, format_significant};
pub use parse::{parse_frequency, parse_impedance};
