use serde::{Deserialize, Serialize};

use crate::core::primitives::unix_millis_to_datetime;
use crate::core::types::DatumValue;

/// Label formatting for datum values (points, tooltips, axis ticks).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValueFormat {
    #[default]
    Raw,
    Fixed {
        decimals: usize,
    },
    Percent {
        #[serde(default)]
        decimals: usize,
    },
    /// chrono strftime pattern; numbers are read as unix milliseconds.
    Time {
        pattern: String,
    },
    Prefixed {
        #[serde(default)]
        prefix: String,
        #[serde(default)]
        suffix: String,
        #[serde(default)]
        decimals: Option<usize>,
    },
}

impl ValueFormat {
    #[must_use]
    pub fn fixed(decimals: usize) -> Self {
        Self::Fixed { decimals }
    }

    #[must_use]
    pub fn time(pattern: impl Into<String>) -> Self {
        Self::Time {
            pattern: pattern.into(),
        }
    }

    #[must_use]
    pub fn format(&self, value: &DatumValue) -> String {
        match (self, value) {
            (Self::Raw, _) => value.to_string(),
            (Self::Fixed { decimals }, DatumValue::Number(number)) => {
                format!("{number:.decimals$}")
            }
            (Self::Percent { decimals }, DatumValue::Number(number)) => {
                format!("{:.decimals$}%", number * 100.0)
            }
            (Self::Time { pattern }, DatumValue::Time(time)) => time.format(pattern).to_string(),
            (Self::Time { pattern }, DatumValue::Number(millis)) => {
                unix_millis_to_datetime(*millis).map_or_else(
                    || value.to_string(),
                    |time| time.format(pattern).to_string(),
                )
            }
            (
                Self::Prefixed {
                    prefix,
                    suffix,
                    decimals,
                },
                DatumValue::Number(number),
            ) => match decimals {
                Some(decimals) => format!("{prefix}{number:.decimals$}{suffix}"),
                None => format!("{prefix}{number}{suffix}"),
            },
            _ => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ValueFormat;
    use crate::core::types::DatumValue;
    use chrono::{TimeZone, Utc};

    #[test]
    fn numeric_formats() {
        let value = DatumValue::Number(0.1234);
        assert_eq!(ValueFormat::Raw.format(&value), "0.1234");
        assert_eq!(ValueFormat::fixed(2).format(&value), "0.12");
        assert_eq!(ValueFormat::Percent { decimals: 1 }.format(&value), "12.3%");
        let money = ValueFormat::Prefixed {
            prefix: "$".to_owned(),
            suffix: String::new(),
            decimals: Some(2),
        };
        assert_eq!(money.format(&DatumValue::Number(3.0)), "$3.00");
    }

    #[test]
    fn time_pattern_applies_to_instants_and_millis() {
        let time = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let format = ValueFormat::time("%b %d");
        assert_eq!(format.format(&DatumValue::Time(time)), "Feb 01");
        assert_eq!(
            format.format(&DatumValue::Number(time.timestamp_millis() as f64)),
            "Feb 01"
        );
    }

    #[test]
    fn text_passes_through_numeric_formats() {
        assert_eq!(ValueFormat::fixed(2).format(&DatumValue::from("A")), "A");
    }
}
