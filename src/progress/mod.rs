//! Challenge progress and finished records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::elapsed_seconds;
use crate::format::{convert, FormatError};
use crate::models::{ConversionResult, Granularity};

/// A running challenge: started at some instant with a goal in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub started: DateTime<Utc>,
    pub goal_days: u32,
}

impl Challenge {
    pub fn new(started: DateTime<Utc>, goal_days: u32) -> Self {
        Self { started, goal_days }
    }

    /// Time since the start as days and leftover hours.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Result<ConversionResult, FormatError> {
        convert(elapsed_seconds(self.started, now), Granularity::DayHour)
    }

    /// Fraction of the goal reached, in whole hours, clamped to `[0.0, 1.0]`.
    pub fn progress(&self, now: DateTime<Utc>) -> Result<f64, FormatError> {
        if self.goal_days == 0 {
            return Err(FormatError::InvalidGoal);
        }

        let hours = convert(elapsed_seconds(self.started, now), Granularity::Hour)?
            .first()
            .quantity();
        let goal_hours = u64::from(self.goal_days) * 24;
        let ratio = hours as f64 / goal_hours as f64;

        tracing::debug!(hours, goal_hours, ratio, "Computed challenge progress");
        Ok(ratio.clamp(0.0, 1.0))
    }

    /// Close the challenge at `ended`, producing a record.
    pub fn finish(&self, ended: DateTime<Utc>) -> Record {
        Record {
            started: self.started,
            ended,
            goal_days: self.goal_days,
        }
    }

    /// Reset at `now`: close this attempt, and start the next one right away
    /// when `start_again` is set.
    pub fn reset(&self, now: DateTime<Utc>, start_again: bool) -> (Record, Option<Challenge>) {
        let record = self.finish(now);
        let next = start_again.then(|| Challenge::new(now, self.goal_days));

        tracing::info!(start_again, "Challenge reset");
        (record, next)
    }
}

/// A finished attempt at a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub started: DateTime<Utc>,
    pub ended: DateTime<Utc>,
    pub goal_days: u32,
}

impl Record {
    /// Whole days the attempt lasted.
    pub fn duration_days(&self) -> Result<u64, FormatError> {
        let result = convert(elapsed_seconds(self.started, self.ended), Granularity::Day)?;
        Ok(result.first().quantity())
    }

    pub fn reached_goal(&self) -> Result<bool, FormatError> {
        Ok(self.duration_days()? >= u64::from(self.goal_days))
    }
}
