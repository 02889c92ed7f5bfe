/// Formats a count with thousands separators, e.g. `1234567` -> `"1,234,567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a server-computed average: integral values render without a
/// decimal point, everything else with one decimal place.
///
/// The backend rounds averages to whole numbers before sending them, so the
/// fractional branch never fires today; it exists so a finer-grained payload
/// displays as a rounded one-decimal figure instead of raw float noise.
pub fn format_average(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::{format_average, format_count};

    #[test]
    fn count_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(12_345), "12,345");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn average_trims_integral_values() {
        assert_eq!(format_average(500.0), "500");
        assert_eq!(format_average(0.0), "0");
        assert_eq!(format_average(12.5), "12.5");
    }

    #[test]
    fn average_rounds_fractional_values_to_one_decimal() {
        assert_eq!(format_average(12.34), "12.3");
        assert_eq!(format_average(12.36), "12.4");
    }
}
