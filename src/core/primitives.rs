use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn unix_millis_to_datetime(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis.round() as i64)
}

/// Parses temporal text.
///
/// With a chrono `pattern`, both date-time and date-only patterns are tried
/// (date-only values map to midnight UTC). Without one, RFC 3339 and plain
/// `%Y-%m-%d` dates are accepted.
#[must_use]
pub fn parse_time_text(text: &str, pattern: Option<&str>) -> Option<DateTime<Utc>> {
    match pattern {
        Some(pattern) => NaiveDateTime::parse_from_str(text, pattern)
            .map(|naive| naive.and_utc())
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(text, pattern)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
                    .map(|naive| naive.and_utc())
            }),
        None => DateTime::parse_from_rfc3339(text)
            .map(|time| time.with_timezone(&Utc))
            .ok()
            .or_else(|| parse_time_text(text, Some("%Y-%m-%d"))),
    }
}

/// Formats a pixel coordinate for SVG output: at most three decimals, no
/// trailing zeros.
#[must_use]
pub fn format_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let mut text = format!("{rounded:.3}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}
