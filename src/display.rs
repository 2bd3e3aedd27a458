use crate::core::currency::Currency;
use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;

/// Format an amount with its currency symbol and thousands grouping,
/// e.g. `R 12,500` or `$ 1,999.99`.
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    format!("{} {}", currency.symbol(), group_thousands(amount))
}

/// Render a timestamp the way the dashboard shows it,
/// e.g. `Jan 15, 2024, 10:30 AM`.
pub fn format_date(date: DateTime<Utc>) -> String {
    format!(
        "{} {}, {}, {}",
        date.format("%b"),
        date.day(),
        date.year(),
        date.format("%I:%M %p")
    )
}

/// Insert commas every three digits in the integer part.
fn group_thousands(amount: Decimal) -> String {
    let rendered = amount.to_string();
    let (sign, rest) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount_small() {
        assert_eq!(format_amount(dec!(850), Currency::Gbp), "£ 850");
    }

    #[test]
    fn test_format_amount_grouped() {
        assert_eq!(format_amount(dec!(12500), Currency::Zar), "R 12,500");
        assert_eq!(format_amount(dec!(1234567), Currency::Usd), "$ 1,234,567");
    }

    #[test]
    fn test_format_amount_fractional() {
        assert_eq!(format_amount(dec!(1999.99), Currency::Usd), "$ 1,999.99");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(dec!(-12500), Currency::Zar), "R -12,500");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(date), "Jan 15, 2024, 10:30 AM");
    }

    #[test]
    fn test_format_date_single_digit_day() {
        let date = Utc.with_ymd_and_hms(2023, 12, 5, 16, 45, 0).unwrap();
        assert_eq!(format_date(date), "Dec 5, 2023, 04:45 PM");
    }
}
