//! Display scaling for frequencies, capacitances and inductances.

const FREQUENCY_UNITS: [(f64, &str); 4] = [(1e9, "GHz"), (1e6, "MHz"), (1e3, "kHz"), (1.0, "Hz")];
const CAPACITANCE_UNITS: [(f64, &str); 4] = [(1e-3, "mF"), (1e-6, "uF"), (1e-9, "nF"), (1e-12, "pF")];
const INDUCTANCE_UNITS: [(f64, &str); 4] = [(1.0, "H"), (1e-3, "mH"), (1e-6, "uH"), (1e-9, "nH")];

/// Frequency with 4 significant digits, e.g. `14.2 MHz`.
pub fn format_frequency(hz: f64) -> String {
    let (scale, suffix) = pick_unit(hz, &FREQUENCY_UNITS);
    format!("{} {}", format_significant(hz / scale, 4), suffix)
}

/// Capacitance with 2 decimals, e.g. `318.31 pF`.
pub fn format_capacitance(farads: f64) -> String {
    let (scale, suffix) = pick_unit(farads, &CAPACITANCE_UNITS);
    format!("{:.2} {}", farads / scale, suffix)
}

/// Inductance with 2 decimals, e.g. `1.59 uH`.
pub fn format_inductance(henries: f64) -> String {
    let (scale, suffix) = pick_unit(henries, &INDUCTANCE_UNITS);
    format!("{:.2} {}", henries / scale, suffix)
}

/// Largest unit not exceeding the value; the smallest unit otherwise.
fn pick_unit(value: f64, units: &[(f64, &'static str)]) -> (f64, &'static str) {
    units
        .iter()
        .copied()
        .find(|(threshold, _)| value.abs() >= *threshold)
        .unwrap_or(units[units.len() - 1])
}

/// Render `value` with `digits` significant digits, dropping trailing zeros.
///
/// Very large or small magnitudes switch to exponent notation, like C's `%g`.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }

    let digits = digits.max(1);
    let exponent = value.abs().log10().floor() as i32;

    if exponent < -4 || exponent >= digits as i32 {
        let s = format!("{:.*e}", digits - 1, value);
        match s.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{}", trim_zeros(mantissa), exp),
            None => s,
        }
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_significant() {
        assert_eq!(format_significant(10.0, 4), "10");
        assert_eq!(format_significant(14.2, 4), "14.2");
        assert_eq!(format_significant(3.14159, 4), "3.142");
        assert_eq!(format_significant(0.5, 4), "0.5");
        assert_eq!(format_significant(123456.0, 4), "1.235e5");
        assert_eq!(format_significant(0.0, 4), "0");
    }

    #[test]
    fn test_format_frequency() {
        assert_eq!(format_frequency(10e6), "10 MHz");
        assert_eq!(format_frequency(1.5e9), "1.5 GHz");
        assert_eq!(format_frequency(500e3), "500 kHz");
        assert_eq!(format_frequency(60.0), "60 Hz");
    }

    #[test]
    fn test_format_capacitance() {
        assert_eq!(format_capacitance(318.31e-12), "318.31 pF");
        assert_eq!(format_capacitance(4.7e-9), "4.70 nF");
        assert_eq!(format_capacitance(2.2e-6), "2.20 uF");
        // Below 1 pF stays in pF
        assert_eq!(format_capacitance(0.5e-12), "0.50 pF");
    }

    #[test]
    fn test_format_inductance() {
        assert_eq!(format_inductance(1.59155e-6), "1.59 uH");
        assert_eq!(format_inductance(795.8e-9), "795.80 nH");
        assert_eq!(format_inductance(2.0), "2.00 H");
    }
}
