//! Display formatting for tenge amounts and percentages.

const GROUP_SEPARATOR: char = '\u{a0}';
const CURRENCY_SIGN: &str = "₸";

/// Formats `value` as whole tenge, e.g. `500 000 ₸`.
///
/// Digits are grouped in threes with non-breaking spaces. Four-digit amounts
/// stay ungrouped (`1000 ₸`), matching the Russian locale's minimum grouping.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = if digits.len() > 4 {
        group_digits(&digits)
    } else {
        digits
    };
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}{}{}", sign, grouped, GROUP_SEPARATOR, CURRENCY_SIGN)
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// One decimal place, as the ratio is stored.
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}
