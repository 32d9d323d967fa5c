//! Duration formatting.
//!
//! Converts a duration in whole seconds into one or two pluralized
//! `(quantity, label)` components. All arithmetic is integer floor division;
//! composite results never round or carry.

use thiserror::Error;

use crate::models::{ConversionResult, DisplayUnit, Granularity, Unit};

/// Formatting errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid input: duration must be non-negative, got {0} seconds")]
    InvalidInput(i64),

    #[error("Unsupported granularity: {0}")]
    UnsupportedGranularity(String),

    #[error("Invalid goal: must be at least one day")]
    InvalidGoal,

    #[error("Malformed display value: {0}")]
    Malformed(String),
}

fn checked_seconds(duration: i64) -> Result<u64, FormatError> {
    u64::try_from(duration).map_err(|_| FormatError::InvalidInput(duration))
}

/// Convert `duration` seconds into display units for `granularity`.
///
/// Single-unit granularities yield one component. `DayHour` yields whole days
/// followed by the hours left over (`0..24`), both present even when zero.
pub fn convert(duration: i64, granularity: Granularity) -> Result<ConversionResult, FormatError> {
    let secs = checked_seconds(duration)?;

    // Lower components only count what the component above leaves over.
    let mut parent: Option<Unit> = None;
    let units = granularity
        .units()
        .iter()
        .map(|&unit| {
            let quantity = match parent {
                Some(outer) => (secs % outer.seconds()) / unit.seconds(),
                None => secs / unit.seconds(),
            };
            parent = Some(unit);
            DisplayUnit::new(quantity, unit)
        })
        .collect();

    Ok(ConversionResult::new(units))
}

/// Convert using a textual granularity name such as `"day hour"` or `"week"`.
pub fn convert_named(duration: i64, name: &str) -> Result<ConversionResult, FormatError> {
    let granularity: Granularity = name.parse()?;
    convert(duration, granularity)
}

/// Raw seconds as a display unit, e.g. `1 second` or `42 seconds`.
pub fn seconds(duration: i64) -> Result<DisplayUnit, FormatError> {
    let secs = checked_seconds(duration)?;
    Ok(DisplayUnit::new(secs, Unit::Second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(result: &ConversionResult) -> Vec<(u64, &str)> {
        result.iter().map(|u| (u.quantity(), u.label())).collect()
    }

    #[test]
    fn test_zero_hours_is_plural() {
        let result = convert(0, Granularity::Hour).unwrap();
        assert_eq!(pairs(&result), vec![(0, "hours")]);
    }

    #[test]
    fn test_one_hour() {
        let result = convert(3600, Granularity::Hour).unwrap();
        assert_eq!(pairs(&result), vec![(1, "hour")]);
    }

    #[test]
    fn test_two_hours() {
        let result = convert(7200, Granularity::Hour).unwrap();
        assert_eq!(pairs(&result), vec![(2, "hours")]);
    }

    #[test]
    fn test_hour_floors() {
        let result = convert(7199, Granularity::Hour).unwrap();
        assert_eq!(pairs(&result), vec![(1, "hour")]);
    }

    #[test]
    fn test_day_hour_one_and_one() {
        let result = convert(90000, Granularity::DayHour).unwrap();
        assert_eq!(pairs(&result), vec![(1, "day"), (1, "hour")]);
    }

    #[test]
    fn test_day_hour_keeps_zero_component() {
        let result = convert(172800, Granularity::DayHour).unwrap();
        assert_eq!(pairs(&result), vec![(2, "days"), (0, "hours")]);
    }

    #[test]
    fn test_day_hour_under_a_day() {
        let result = convert(5 * 3600 + 59 * 60, Granularity::DayHour).unwrap();
        assert_eq!(pairs(&result), vec![(0, "days"), (5, "hours")]);
    }

    #[test]
    fn test_one_week() {
        let result = convert(604800, Granularity::Week).unwrap();
        assert_eq!(pairs(&result), vec![(1, "week")]);
    }

    #[test]
    fn test_days() {
        let result = convert(3 * 86400 + 86399, Granularity::Day).unwrap();
        assert_eq!(pairs(&result), vec![(3, "days")]);
    }

    #[test]
    fn test_convert_is_repeatable() {
        for granularity in Granularity::ALL {
            let first = convert(1_234_567, granularity).unwrap();
            let second = convert(1_234_567, granularity).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_day_hour_bounds() {
        let samples = (0..200_000i64)
            .step_by(997)
            .chain([86399, 86400, 86401, 3599, 3600, 604799, i64::MAX]);

        for d in samples {
            let result = convert(d, Granularity::DayHour).unwrap();
            let days = result.units()[0].quantity() as u128;
            let hours = result.units()[1].quantity() as u128;
            let d = d as u128;

            assert!(hours < 24, "hours out of range for {}", d);
            assert!(days * 86400 + hours * 3600 <= d, "lower bound for {}", d);
            assert!(d < days * 86400 + (hours + 1) * 3600, "upper bound for {}", d);
        }
    }

    #[test]
    fn test_negative_duration_rejected() {
        assert_eq!(convert(-1, Granularity::Hour), Err(FormatError::InvalidInput(-1)));
        assert_eq!(
            convert(i64::MIN, Granularity::DayHour),
            Err(FormatError::InvalidInput(i64::MIN))
        );
    }

    #[test]
    fn test_convert_named() {
        let result = convert_named(90000, "day hour").unwrap();
        assert_eq!(result.to_string(), "1 day 1 hour");
    }

    #[test]
    fn test_convert_named_unsupported() {
        let err = convert_named(60, "fortnight").unwrap_err();
        assert_eq!(err, FormatError::UnsupportedGranularity("fortnight".to_string()));
    }

    #[test]
    fn test_seconds() {
        assert_eq!(seconds(0).unwrap().to_string(), "0 seconds");
        assert_eq!(seconds(1).unwrap().to_string(), "1 second");
        assert_eq!(seconds(2).unwrap().to_string(), "2 seconds");
        assert_eq!(seconds(-5), Err(FormatError::InvalidInput(-5)));
    }

    #[test]
    fn test_values_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<ConversionResult>();
        assert_send_sync::<DisplayUnit>();
        assert_send_sync::<Granularity>();
        assert_send_sync::<Unit>();
        assert_send_sync::<FormatError>();
    }

    #[test]
    fn test_convert_across_threads() {
        let handles: Vec<_> = (0..4i64)
            .map(|i| std::thread::spawn(move || convert(90000 * i, Granularity::DayHour)))
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.join().unwrap().unwrap();
            assert_eq!(result, convert(90000 * i as i64, Granularity::DayHour).unwrap());
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            FormatError::InvalidInput(-1).to_string(),
            "Invalid input: duration must be non-negative, got -1 seconds"
        );
    }
}
