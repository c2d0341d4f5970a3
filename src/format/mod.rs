//! Number formatting for the two places a price appears in the document.
//!
//! The table cell uses a grouped, locale-dependent display format while the
//! embedded form script needs a plain literal with a period decimal point.
//! The two never share code paths so a locale change cannot leak into the
//! script.

use serde::{Deserialize, Serialize};

const DISPLAY_PRECISION: usize = 2;

/// Separators used when rendering prices for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NumberLocale {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl NumberLocale {
    pub const fn english() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }

    pub const fn german() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::english()
    }
}

/// Renders `price` as `#,##0.00` using the separators of `locale`.
pub fn format_display_price(price: f64, locale: &NumberLocale) -> String {
    let body = format!("{:.*}", DISPLAY_PRECISION, price.abs());
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body.as_str(), ""));
    let mut out = String::with_capacity(body.len() + int_part.len() / 3 + 1);
    if price < 0.0 && body.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, locale.grouping_separator));
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

/// Renders `price` as a literal the form script can parse.
///
/// Uses the shortest representation that round-trips, always with `.` as the
/// decimal point and never with grouping.
pub fn format_script_literal(price: f64) -> String {
    price.to_string()
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}
