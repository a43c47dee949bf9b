fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `1247` -> `1,247`
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// USD with cents, e.g. `156750.0` -> `$156,750.00`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(&(cents / 100).to_string()),
        cents % 100
    )
}

/// Compact amount used inside grids: whole numbers drop the fraction.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(498), "498");
        assert_eq!(format_count(1247), "1,247");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn currency_has_two_decimals_and_grouping() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(156750.0), "$156,750.00");
        assert_eq!(format_currency(199.999), "$200.00");
        assert_eq!(format_currency(-80.5), "-$80.50");
    }

    #[test]
    fn grid_amounts_drop_trailing_zero_fraction() {
        assert_eq!(format_amount(200.0), "200");
        assert_eq!(format_amount(120.5), "120.50");
    }
}
