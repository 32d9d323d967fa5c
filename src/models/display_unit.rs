//! Quantities paired with pluralized unit labels.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Unit;
use crate::format::FormatError;

/// Pluralize an English noun for a count: singular only when `count == 1`.
pub fn pluralize(count: u64, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Render a count with its pluralized noun, e.g. `"3 Reminders"`.
pub fn count_label(count: u64, word: &str) -> String {
    format!("{} {}", count, pluralize(count, word))
}

#[derive(Deserialize)]
struct RawDisplayUnit {
    quantity: u64,
    label: String,
}

/// A quantity and its unit label, kept separate so callers choose the layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDisplayUnit")]
pub struct DisplayUnit {
    quantity: u64,
    label: String,
}

impl DisplayUnit {
    /// Build a display unit, pluralizing the unit's word for `quantity`.
    pub fn new(quantity: u64, unit: Unit) -> Self {
        Self {
            quantity,
            label: pluralize(quantity, unit.word()),
        }
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl TryFrom<RawDisplayUnit> for DisplayUnit {
    type Error = FormatError;

    fn try_from(raw: RawDisplayUnit) -> Result<Self, Self::Error> {
        Unit::ALL
            .iter()
            .map(|unit| DisplayUnit::new(raw.quantity, *unit))
            .find(|unit| unit.label == raw.label)
            .ok_or_else(|| {
                FormatError::Malformed(format!(
                    "label {:?} does not match quantity {}",
                    raw.label, raw.quantity
                ))
            })
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.label)
    }
}

/// Ordered components of a converted duration, most significant first.
///
/// Always holds one or two components.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversionResult(#[serde(deserialize_with = "deserialize_units")] Vec<DisplayUnit>);

fn deserialize_units<'de, D>(deserializer: D) -> Result<Vec<DisplayUnit>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let units = Vec::<DisplayUnit>::deserialize(deserializer)?;
    if !(1..=2).contains(&units.len()) {
        return Err(serde::de::Error::custom(FormatError::Malformed(format!(
            "expected 1 or 2 components, got {}",
            units.len()
        ))));
    }
    Ok(units)
}

impl ConversionResult {
    pub(crate) fn new(units: Vec<DisplayUnit>) -> Self {
        Self(units)
    }

    pub fn units(&self) -> &[DisplayUnit] {
        &self.0
    }

    /// The most significant component.
    pub fn first(&self) -> &DisplayUnit {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DisplayUnit> {
        self.0.iter()
    }

    pub fn into_units(self) -> Vec<DisplayUnit> {
        self.0
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|u| u.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

impl<'a> IntoIterator for &'a ConversionResult {
    type Item = &'a DisplayUnit;
    type IntoIter = std::slice::Iter<'a, DisplayUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "hour"), "hours");
        assert_eq!(pluralize(1, "hour"), "hour");
        assert_eq!(pluralize(2, "second"), "seconds");
        assert_eq!(pluralize(1, "Reminder"), "Reminder");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "Reminder"), "0 Reminders");
        assert_eq!(count_label(1, "Reminder"), "1 Reminder");
        assert_eq!(count_label(3, "Reminder"), "3 Reminders");
    }

    #[test]
    fn test_display_unit_new() {
        let unit = DisplayUnit::new(1, Unit::Week);
        assert_eq!(unit.quantity(), 1);
        assert_eq!(unit.label(), "week");
        assert_eq!(unit.to_string(), "1 week");
    }

    #[test]
    fn test_display_unit_deserialize() {
        let unit: DisplayUnit = serde_json::from_str(r#"{"quantity":0,"label":"days"}"#).unwrap();
        assert_eq!(unit, DisplayUnit::new(0, Unit::Day));
    }

    #[test]
    fn test_display_unit_deserialize_rejects_mismatched_label() {
        let plural_mismatch = serde_json::from_str::<DisplayUnit>(r#"{"quantity":5,"label":"hour"}"#);
        assert!(plural_mismatch.is_err());

        let unknown_word = serde_json::from_str::<DisplayUnit>(r#"{"quantity":2,"label":"fortnights"}"#);
        assert!(unknown_word.is_err());
    }

    #[test]
    fn test_conversion_result_display() {
        let result = ConversionResult::new(vec![
            DisplayUnit::new(2, Unit::Day),
            DisplayUnit::new(0, Unit::Hour),
        ]);
        assert_eq!(result.to_string(), "2 days 0 hours");
        assert_eq!(result.len(), 2);
        assert_eq!(result.first().label(), "days");
    }

    #[test]
    fn test_conversion_result_serialization() {
        let result = ConversionResult::new(vec![DisplayUnit::new(1, Unit::Hour)]);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"[{"quantity":1,"label":"hour"}]"#);

        let parsed: ConversionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_conversion_result_rejects_empty() {
        let err = serde_json::from_str::<ConversionResult>("[]").unwrap_err();
        assert!(err.to_string().contains("expected 1 or 2 components, got 0"));
    }

    #[test]
    fn test_conversion_result_rejects_three_components() {
        let json = r#"[{"quantity":1,"label":"week"},{"quantity":1,"label":"day"},{"quantity":1,"label":"hour"}]"#;
        assert!(serde_json::from_str::<ConversionResult>(json).is_err());
    }
}
