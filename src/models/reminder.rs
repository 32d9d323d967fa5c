//! Daily reminders configured in settings.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::clock::time_of_day;

/// A reminder shown at a fixed time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(default = "default_content")]
    pub content: String,

    /// Local time of day, e.g. "07:30:00"
    pub time: NaiveTime,

    /// Repeat every day rather than firing once
    #[serde(default = "default_will_repeat")]
    pub will_repeat: bool,
}

fn default_content() -> String {
    "Nothing can stop the man with the right mental attitude from achieving his goal.".to_string()
}

fn default_will_repeat() -> bool {
    true
}

impl Reminder {
    pub fn new(time: NaiveTime, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            time,
            will_repeat: default_will_repeat(),
        }
    }

    /// One-line summary such as `7:30 AM  Drink water (daily)`.
    pub fn summary(&self) -> String {
        let schedule = if self.will_repeat { "daily" } else { "once" };
        format!("{}  {} ({})", time_of_day(Some(self.time)), self.content, schedule)
    }
}
