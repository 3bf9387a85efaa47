/// Render an amount of cents as a decimal with exactly two fraction digits.
///
/// ```
/// use checkout_loader::model::money::format_currency;
///
/// assert_eq!(format_currency(1999), "19.99");
/// assert_eq!(format_currency(7), "0.07");
/// ```
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();

    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

#[cfg(test)]
mod test {
    use super::format_currency;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(2095), "20.95");
        assert_eq!(format_currency(0), "0.00");
        assert_eq!(format_currency(100), "1.00");
        assert_eq!(format_currency(-5), "-0.05");
        assert_eq!(format_currency(123456789), "1234567.89");
        assert_eq!(format_currency(i64::MIN), "-92233720368547758.08");
    }
}
