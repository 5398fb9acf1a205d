use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Canonical weekday labels, in the order the backend aggregates them.
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One row of a duration-per-weekday payload (total or mean seconds).
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayDuration {
    pub weekday: String,
    pub seconds: f64,
}

/// Duration-per-weekday rows plus the column labels the backend may prepend
/// as a header row (`["Weekday", "Presence (s)"]`).
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayStats {
    pub weekday_label: Option<String>,
    pub value_label: Option<String>,
    pub rows: Vec<WeekdayDuration>,
}

impl WeekdayStats {
    /// Splits raw `[weekday, value]` rows into an optional header and data
    /// rows. A row whose second element is a string is only valid as the
    /// leading header row.
    pub(crate) fn from_rows(raw: Vec<(String, Value)>) -> Result<Self, String> {
        let mut weekday_label = None;
        let mut value_label = None;
        let mut rows = Vec::with_capacity(raw.len());

        for (i, (label, value)) in raw.into_iter().enumerate() {
            match value {
                Value::String(s) if i == 0 => {
                    weekday_label = Some(label);
                    value_label = Some(s);
                }
                Value::Number(n) => {
                    let seconds = n
                        .as_f64()
                        .ok_or_else(|| format!("row {}: seconds out of range", i))?;
                    rows.push(WeekdayDuration {
                        weekday: label,
                        seconds,
                    });
                }
                other => return Err(format!("row {}: expected seconds, got {}", i, other)),
            }
        }

        Ok(Self {
            weekday_label,
            value_label,
            rows,
        })
    }
}

/// Average start/end of presence for one weekday, in seconds since midnight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdaySpan {
    pub weekday: String,
    pub start_seconds: f64,
    pub end_seconds: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawSpan {
    pub start: f64,
    pub end: f64,
}

/// Orders a weekday → span mapping into canonical Mon..Sun rows. Days the
/// backend did not report are skipped; unknown keys are ignored.
pub(crate) fn spans_in_weekday_order(mut raw: HashMap<String, RawSpan>) -> Vec<WeekdaySpan> {
    WEEKDAYS
        .iter()
        .filter_map(|day| {
            raw.remove(*day).map(|span| WeekdaySpan {
                weekday: (*day).to_string(),
                start_seconds: span.start,
                end_seconds: span.end,
            })
        })
        .collect()
}
