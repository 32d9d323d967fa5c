//! # Progressus
//!
//! Duration formatting for countdown timers and habit challenges.
//!
//! ## Architecture
//!
//! - **format**: Seconds to pluralized `(quantity, label)` components
//! - **models**: Granularities, units, display units and themes
//! - **clock**: Elapsed time between instants, time and date labels
//! - **progress**: Challenge progress against a goal, finished records
//! - **config**: Configuration loading and validation

pub mod clock;
pub mod config;
pub mod format;
pub mod models;
pub mod progress;

pub use format::{convert, convert_named, FormatError};
pub use models::*;

use std::time::Duration;

/// Parse a human-friendly duration string (e.g., "2w", "3d", "6h", "30m", "90s").
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('w') {
        (n, Unit::Week.seconds())
    } else if let Some(n) = s.strip_suffix('d') {
        (n, Unit::Day.seconds())
    } else if let Some(n) = s.strip_suffix('h') {
        (n, Unit::Hour.seconds())
    } else if let Some(n) = s.strip_suffix('m') {
        (n, MINUTE_SECONDS)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1)
    } else {
        // Default to seconds
        (s, 1)
    };

    let num: u64 = num_str.parse().ok()?;
    Some(Duration::from_secs(num.checked_mul(multiplier)?))
}
