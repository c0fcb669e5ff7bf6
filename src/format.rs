//! Display helpers for amounts, dates and contact recency.

use chrono::NaiveDateTime;

use crate::domain::types::parse_timestamp;

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole-unit currency amount, e.g. `$125,000` or `-€1,200`.
///
/// Negative amounts keep their sign even when they round to zero (`-$0`).
/// Non-finite amounts render as "N/A".
pub fn format_currency(amount: f64, currency: &str) -> String {
    if !amount.is_finite() {
        return "N/A".to_string();
    }

    let rounded = amount.round();
    let sign = if amount < 0.0 { "-" } else { "" };
    let digits = group_thousands(&format!("{:.0}", rounded.abs()));

    match currency.to_uppercase().as_str() {
        "USD" => format!("{sign}${digits}"),
        "EUR" => format!("{sign}€{digits}"),
        "GBP" => format!("{sign}£{digits}"),
        other => format!("{sign}{other} {digits}"),
    }
}

/// Long-form date such as "February 2, 2026".
///
/// Input that is not a recognizable date is returned unchanged.
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Ok(value) => value.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Human label for how long ago a client was last contacted.
pub fn time_since_last_contact(last_contacted_at: NaiveDateTime, now: NaiveDateTime) -> String {
    let days = (now - last_contacted_at).num_days().abs();

    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} day(s) ago"),
        7..=29 => format!("{} week(s) ago", days / 7),
        30..=364 => format!("{} month(s) ago", days / 30),
        _ => format!("{} year(s) ago", days / 365),
    }
}

/// Debt-to-asset ratio as a percentage, or "N/A" when it is undefined.
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(value) => format!("{:.1}%", value * 100.0),
        None => "N/A".to_string(),
    }
}
