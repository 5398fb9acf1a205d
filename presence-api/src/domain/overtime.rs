use serde::Deserialize;

/// Per-employee excess-hours figure; list order is the server-assigned rank.
#[derive(Debug, Clone, PartialEq)]
pub struct OvertimeEntry {
    pub name: String,
    pub overtime_seconds: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawOvertime {
    pub name: String,
    pub overtime: f64,
}

impl From<RawOvertime> for OvertimeEntry {
    fn from(raw: RawOvertime) -> Self {
        Self {
            name: raw.name,
            overtime_seconds: raw.overtime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::IgnoredAny;
    use serde_json::json;

    #[test]
    fn ranked_entries_keep_server_order() {
        // The leading rank value is redundant with list position and ignored.
        let raw: Vec<(IgnoredAny, RawOvertime)> = serde_json::from_value(json!([
            [0, {"name": "Anna", "overtime": 7200.0}],
            [1, {"name": "Piotr", "overtime": 3600.0}],
        ]))
        .unwrap();

        let entries: Vec<OvertimeEntry> = raw.into_iter().map(|(_, e)| e.into()).collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Anna");
        assert_eq!(entries[0].overtime_seconds, 7200.0);
        assert_eq!(entries[1].name, "Piotr");
    }
}
