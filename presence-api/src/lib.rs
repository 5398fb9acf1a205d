mod client;
mod presence_url;
pub mod domain;

pub(crate) use presence_url::*;

pub use client::*;
pub use domain::{Avatar, OvertimeEntry, UserRef, WeekdayDuration, WeekdaySpan, WeekdayStats, WEEKDAYS};
