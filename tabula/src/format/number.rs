use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use crate::config::Locale;
use crate::model::Numeric;

/// `value` rounded half away from zero to exactly two places, grouped per
/// `locale`.
pub fn fixed_2dp(value: impl Into<Numeric>, locale: &Locale) -> String {
    let (negative, digits) = split_2dp(value.into());
    let body = group(&digits, locale);
    if negative { format!("-{body}") } else { body }
}

/// Like [`fixed_2dp`] with the currency symbol after the sign.
pub fn currency_2dp(value: impl Into<Numeric>, locale: &Locale) -> String {
    let (negative, digits) = split_2dp(value.into());
    let body = group(&digits, locale);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{}{body}", locale.currency_symbol)
}

fn split_2dp(value: Numeric) -> (bool, String) {
    let value = match value {
        Numeric::Exact(d) => d,
        Numeric::Approx(f) => {
            let digits = format!("{:.2}", f.abs());
            return (f < 0.0 && digits != "0.00", digits);
        }
    };
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    (negative, rounded.abs().to_string())
}

fn group(digits: &str, locale: &Locale) -> String {
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(locale.thousands_separator);
        }
        grouped.push(ch);
    }

    format!("{grouped}{}{frac_part}", locale.decimal_separator)
}
