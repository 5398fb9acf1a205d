//! Builders turning decoded statistics payloads into chart tables.

use presence_api::{OvertimeEntry, WeekdaySpan, WeekdayStats};

use super::{Cell, ChartTable, Column, ColumnType};
use crate::time_utils::{epoch_datetime, epoch_midnight};

/// Table for the presence-by-weekday pie: one text + one number column.
/// The payload header row, when present, supplies the column labels.
pub fn presence_weekday_table(stats: &WeekdayStats) -> ChartTable {
    let weekday_label = stats.weekday_label.as_deref().unwrap_or("Weekday");
    let value_label = stats.value_label.as_deref().unwrap_or("Presence (s)");

    let mut table = ChartTable::new(vec![
        Column::new(weekday_label, ColumnType::Text),
        Column::new(value_label, ColumnType::Number),
    ]);
    for row in &stats.rows {
        table.push_row(vec![Cell::Text(row.weekday.clone()), Cell::Number(row.seconds)]);
    }
    table
}

/// Table for the mean-time column chart: mean seconds become datetimes
/// anchored to the chart epoch so the value column formats as wall-clock time.
pub fn mean_time_weekday_table(stats: &WeekdayStats) -> ChartTable {
    let mut table = ChartTable::new(vec![
        Column::new("Weekday", ColumnType::Text),
        Column::new("Mean time (h:m:s)", ColumnType::DateTime),
    ]);
    for row in &stats.rows {
        table.push_row(vec![
            Cell::Text(row.weekday.clone()),
            Cell::DateTime(epoch_datetime(row.seconds)),
        ]);
    }
    table
}

/// Table for the start-end timeline: one bar per weekday from average start
/// to average end.
pub fn start_end_table(spans: &[WeekdaySpan]) -> ChartTable {
    let mut table = ChartTable::new(vec![
        Column::new("Weekday", ColumnType::Text),
        Column::new("Start", ColumnType::DateTime),
        Column::new("End", ColumnType::DateTime),
    ]);
    for span in spans {
        table.push_row(vec![
            Cell::Text(span.weekday.clone()),
            Cell::DateTime(epoch_datetime(span.start_seconds)),
            Cell::DateTime(epoch_datetime(span.end_seconds)),
        ]);
    }
    table
}

/// Table for the overtime timeline: rank + name, with every bar starting at
/// epoch midnight and ending at midnight + overtime.
pub fn overtime_table(entries: &[OvertimeEntry]) -> ChartTable {
    let mut table = ChartTable::new(vec![
        Column::new("Position", ColumnType::Text),
        Column::new("Name", ColumnType::Text),
        Column::new("Start", ColumnType::DateTime),
        Column::new("End", ColumnType::DateTime),
    ]);
    for (i, entry) in entries.iter().enumerate() {
        table.push_row(vec![
            Cell::Text((i + 1).to_string()),
            Cell::Text(entry.name.clone()),
            Cell::DateTime(epoch_midnight()),
            Cell::DateTime(epoch_datetime(entry.overtime_seconds)),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use presence_api::WeekdayDuration;

    fn full_week() -> WeekdayStats {
        let rows = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
            .iter()
            .enumerate()
            .map(|(i, day)| WeekdayDuration {
                weekday: (*day).to_string(),
                seconds: (i as f64 + 1.0) * 3600.0,
            })
            .collect();
        WeekdayStats {
            weekday_label: None,
            value_label: None,
            rows,
        }
    }

    #[test]
    fn weekday_table_keeps_one_row_per_weekday_in_input_order() {
        let table = presence_weekday_table(&full_week());
        assert_eq!(table.row_count(), 7);
        assert_eq!(table.text(0, 0), Some("Mon"));
        assert_eq!(table.text(6, 0), Some("Sun"));
        assert_eq!(table.number(2, 1), Some(3.0 * 3600.0));
    }

    #[test]
    fn weekday_table_uses_header_labels_when_present() {
        let mut stats = full_week();
        stats.weekday_label = Some("Weekday".to_string());
        stats.value_label = Some("Presence (s)".to_string());
        let table = presence_weekday_table(&stats);
        assert_eq!(table.columns()[0].label, "Weekday");
        assert_eq!(table.columns()[1].label, "Presence (s)");
    }

    #[test]
    fn mean_time_table_anchors_values_to_the_chart_epoch() {
        let table = mean_time_weekday_table(&full_week());
        let dt = table.datetime(0, 1).unwrap();
        assert_eq!(dt, epoch_datetime(3600.0));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (1, 0, 0));
    }

    #[test]
    fn start_end_table_maps_span_bounds_to_datetimes() {
        let spans = vec![WeekdaySpan {
            weekday: "Mon".to_string(),
            start_seconds: 30600.0,
            end_seconds: 60300.0,
        }];
        let table = start_end_table(&spans);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.datetime(0, 1), Some(epoch_datetime(30600.0)));
        assert_eq!(table.datetime(0, 2), Some(epoch_datetime(60300.0)));
    }

    #[test]
    fn overtime_table_starts_every_bar_at_epoch_midnight() {
        let entries = vec![
            OvertimeEntry {
                name: "Anna".to_string(),
                overtime_seconds: 7200.0,
            },
            OvertimeEntry {
                name: "Piotr".to_string(),
                overtime_seconds: 3600.0,
            },
        ];
        let table = overtime_table(&entries);
        assert_eq!(table.row_count(), 2);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(table.text(i, 0).unwrap(), (i + 1).to_string());
            assert_eq!(table.text(i, 1), Some(entry.name.as_str()));
            assert_eq!(table.datetime(i, 2), Some(epoch_midnight()));
            assert_eq!(
                table.datetime(i, 3),
                Some(epoch_datetime(entry.overtime_seconds))
            );
        }
    }
}
