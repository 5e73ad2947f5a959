//! Number formatting for metric displays and table cells.

/// Formats a floating-point number without trailing zeros after the decimal point.
///
/// # Examples
///
/// ```
/// use salary_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(40.0), "40");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Rounds to the nearest integer and groups digits by thousands with commas.
///
/// ```
/// use salary_common::format_thousands;
///
/// assert_eq!(format_thousands(1800.0), "1,800");
/// assert_eq!(format_thousands(-1234567.4), "-1,234,567");
/// ```
pub fn format_thousands(v: f64) -> String {
    let rounded = v.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats an annual USD amount the way the metric cards show it.
///
/// ```
/// use salary_common::format_usd;
///
/// assert_eq!(format_usd(90000.0), "$90,000");
/// assert_eq!(format_usd(0.0), "$0");
/// ```
pub fn format_usd(v: f64) -> String {
    format!("${}", format_thousands(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(10.5), "10.5");
    }

    #[test]
    fn test_format_thousands_small_values() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(999.6), "1,000");
    }

    #[test]
    fn test_format_usd_large_values() {
        assert_eq!(format_usd(150000.0), "$150,000");
        assert_eq!(format_usd(1234567.0), "$1,234,567");
    }
}
