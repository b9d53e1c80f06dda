//! Value formatting for display.
//!
//! The engine hands over raw f64s, including NaN and Infinity for degenerate
//! inputs; every formatter here renders those as `--` so they cannot corrupt
//! aligned columns.

/// Placeholder for NaN/Infinity values.
const NON_FINITE: &str = "--";

fn thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

/// Format a monetary value without cents (the upstream display rounding).
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return NON_FINITE.to_string();
    }

    let rounded = value.round() as i64;
    if rounded < 0 {
        format!("-${}", thousands(rounded))
    } else {
        format!("${}", thousands(rounded))
    }
}

/// Format a plain number with fixed decimals and thousands separators.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NON_FINITE.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let grouped = thousands(int_part.parse::<i64>().unwrap_or(0));

    let sign = if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format a percentage that is already scaled to 0-100.
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return NON_FINITE.to_string();
    }
    format!("{value:.2}%")
}

/// Format an hour quantity.
pub fn format_hours(value: f64) -> String {
    if !value.is_finite() {
        return NON_FINITE.to_string();
    }
    format!("{value:.1} h")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(1341.54), "$1,342");
        assert_eq!(format_currency(-247.5), "-$248");
        assert_eq!(format_currency(1_237_500.0), "$1,237,500");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "--");
        assert_eq!(format_currency(f64::INFINITY), "--");
        assert_eq!(format_currency(f64::NEG_INFINITY), "--");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(19_200.0, 0), "19,200");
        assert_eq!(format_number(8.0, 1), "8.0");
        assert_eq!(format_number(-3.25, 2), "-3.25");
        assert_eq!(format_number(-0.001, 1), "0.0");
        assert_eq!(format_number(f64::NAN, 1), "--");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(35.555_555), "35.56%");
        assert_eq!(format_percentage(148.148), "148.15%");
        assert_eq!(format_percentage(f64::INFINITY), "--");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(320.0), "320.0 h");
        assert_eq!(format_hours(26.666_7), "26.7 h");
        assert_eq!(format_hours(f64::NAN), "--");
    }
}
