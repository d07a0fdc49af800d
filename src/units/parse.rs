//! Parsing of frequency and impedance strings.

use crate::error::{FilterError, Result};

/// Frequency suffixes, longest first so `mhz` wins over `hz`.
const FREQUENCY_SUFFIXES: [(&str, f64); 4] = [("ghz", 1e9), ("mhz", 1e6), ("khz", 1e3), ("hz", 1.0)];

/// Impedance suffixes. `mohm` is megaohm.
const IMPEDANCE_SUFFIXES: [(&str, f64); 3] = [("mohm", 1e6), ("kohm", 1e3), ("ohm", 1.0)];

/// Parse a frequency such as `14200000`, `14.2MHz` or `500 kHz` into Hz.
///
/// Suffixes are case-insensitive.
pub fn parse_frequency(text: &str) -> Result<f64> {
    let lower = text.trim().to_lowercase();
    parse_with_suffixes(text, &lower, &FREQUENCY_SUFFIXES)
}

/// Parse an impedance such as `50`, `75ohm`, `1kohm` or `50Ω` into Ohms.
pub fn parse_impedance(text: &str) -> Result<f64> {
    let lower = text
        .trim()
        .to_lowercase()
        .replace(['Ω', 'ω'], "ohm");
    parse_with_suffixes(text, &lower, &IMPEDANCE_SUFFIXES)
}

fn parse_with_suffixes(input: &str, lower: &str, suffixes: &[(&str, f64)]) -> Result<f64> {
    let (num_str, multiplier) = suffixes
        .iter()
        .find_map(|(suffix, mult)| lower.strip_suffix(suffix).map(|rest| (rest.trim(), *mult)))
        .unwrap_or((lower, 1.0));

    if num_str.is_empty() {
        return Err(FilterError::invalid_quantity(input, "missing number"));
    }

    num_str
        .parse::<f64>()
        .map(|v| v * multiplier)
        .map_err(|e| FilterError::invalid_quantity(input, e.to_string()))
}
