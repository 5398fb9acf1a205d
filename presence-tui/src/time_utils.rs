use time::macros::date;
use time::{Date, Duration, PrimitiveDateTime, Time};

/// Fixed anchor day for chart datetimes; only the time-of-day part carries
/// information. No timezone handling anywhere, values are plain offsets.
pub const CHART_EPOCH: Date = date!(1900 - 01 - 01);

pub fn epoch_midnight() -> PrimitiveDateTime {
    PrimitiveDateTime::new(CHART_EPOCH, Time::MIDNIGHT)
}

/// A seconds-since-midnight value as a datetime anchored to the chart epoch.
pub fn epoch_datetime(seconds: f64) -> PrimitiveDateTime {
    epoch_midnight() + Duration::seconds_f64(seconds)
}

/// Seconds offset from the chart epoch of a datetime cell.
pub fn seconds_from_epoch(dt: PrimitiveDateTime) -> f64 {
    (dt - epoch_midnight()).as_seconds_f64()
}

/// Wall-clock `HH:MM:SS` for a seconds-since-midnight value.
pub fn clock_time(seconds: f64) -> String {
    let total = (seconds.round() as i64).max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Compact `Xh:YYm` legend label.
pub fn hours_minutes(seconds: f64) -> String {
    let hours = seconds / 3600.0;
    let h = hours.floor() as u64;
    let m = ((hours - h as f64) * 60.0).round() as u64;
    format!("{}h:{:02}m", h, m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_time_carries_seconds_into_minutes_and_hours() {
        assert_eq!(clock_time(3661.0), "01:01:01");
    }

    #[test]
    fn clock_time_covers_the_day_boundaries() {
        assert_eq!(clock_time(0.0), "00:00:00");
        assert_eq!(clock_time(59.0), "00:00:59");
        assert_eq!(clock_time(60.0), "00:01:00");
        assert_eq!(clock_time(86399.0), "23:59:59");
    }

    #[test]
    fn epoch_datetime_round_trips_through_seconds() {
        let dt = epoch_datetime(3661.0);
        assert_eq!(dt.date(), CHART_EPOCH);
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (1, 1, 1));
        assert_eq!(seconds_from_epoch(dt), 3661.0);
    }

    #[test]
    fn epoch_midnight_is_the_zero_point() {
        assert_eq!(seconds_from_epoch(epoch_midnight()), 0.0);
        assert_eq!(clock_time(seconds_from_epoch(epoch_datetime(30600.0))), "08:30:00");
    }

    #[test]
    fn hours_minutes_formats_partial_hours() {
        assert_eq!(hours_minutes(3600.0), "1h:00m");
        assert_eq!(hours_minutes(5400.0), "1h:30m");
    }
}
