//! Clock helpers for feeding the formatter and labelling instants.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Whole seconds from `start` to `now`, truncated toward zero.
///
/// Negative when `now` is before `start`; the formatter rejects that.
pub fn elapsed_seconds(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - start).num_seconds()
}

/// Short 12-hour clock string such as `7:29 AM`. Empty when no time is set.
pub fn time_of_day(time: Option<NaiveTime>) -> String {
    match time {
        Some(t) => t.format("%-I:%M %p").to_string(),
        None => String::new(),
    }
}

/// Medium-length date such as `Jan 17, 2017`.
pub fn medium_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
