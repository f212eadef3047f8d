//! Loosely typed recorded values
//!
//! Amenity surveys and works spreadsheets mix counts, yes/no flags and
//! free text in the same columns. `FieldValue` keeps the raw shape and offers
//! lenient coercions for reporting plus a strict one for ingestion.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Null or whitespace-only text
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Lenient count: anything that is not a non-negative number becomes 0
    pub fn as_count(&self) -> u32 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Bool(b) => u32::from(*b),
            FieldValue::Number(n) => truncate_count(*n),
            FieldValue::Text(s) => {
                let s = s.trim();
                if let Ok(n) = s.parse::<u64>() {
                    return n.min(u64::from(u32::MAX)) as u32;
                }
                s.parse::<f64>().map(truncate_count).unwrap_or(0)
            }
        }
    }

    /// Presence check used for yes/no amenities
    ///
    /// Empty text, "No", false, null and zero (numeric or numeric text) are
    /// absent; any other value counts as present.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Bool(b) => *b,
            FieldValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FieldValue::Text(s) => {
                let s = s.trim();
                if s.is_empty() || s.eq_ignore_ascii_case("no") {
                    return false;
                }
                match s.parse::<f64>() {
                    Ok(n) => n != 0.0,
                    Err(_) => true,
                }
            }
        }
    }

    /// Strict numeric reading for the ingestion boundary
    ///
    /// Returns `None` for blanks, booleans, non-finite numbers and text that
    /// does not parse.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(*n),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Text rendering, empty for null
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.trim().to_string(),
        }
    }
}

fn truncate_count(n: f64) -> u32 {
    if n.is_nan() || n <= 0.0 {
        0
    } else if n >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        n.trunc() as u32
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_count_numbers() {
        assert_eq!(FieldValue::Number(12.0).as_count(), 12);
        assert_eq!(FieldValue::Number(7.9).as_count(), 7);
        assert_eq!(FieldValue::Number(-3.0).as_count(), 0);
        assert_eq!(FieldValue::Number(f64::NAN).as_count(), 0);
    }

    #[test]
    fn test_as_count_text() {
        assert_eq!(FieldValue::text(" 15 ").as_count(), 15);
        assert_eq!(FieldValue::text("4.0").as_count(), 4);
        assert_eq!(FieldValue::text("2 on each PF").as_count(), 0);
        assert_eq!(FieldValue::text("").as_count(), 0);
    }

    #[test]
    fn test_as_count_bool_and_null() {
        assert_eq!(FieldValue::Bool(true).as_count(), 1);
        assert_eq!(FieldValue::Bool(false).as_count(), 0);
        assert_eq!(FieldValue::Null.as_count(), 0);
    }

    #[test]
    fn test_truthiness() {
        assert!(FieldValue::text("Yes").is_truthy());
        assert!(FieldValue::text("Available at PF1").is_truthy());
        assert!(FieldValue::Number(2.0).is_truthy());
        assert!(FieldValue::Bool(true).is_truthy());

        assert!(!FieldValue::text("No").is_truthy());
        assert!(!FieldValue::text("  no ").is_truthy());
        assert!(!FieldValue::text("").is_truthy());
        assert!(!FieldValue::text("0").is_truthy());
        assert!(!FieldValue::Number(0.0).is_truthy());
        assert!(!FieldValue::Null.is_truthy());
    }

    #[test]
    fn test_to_f64_is_strict() {
        assert_eq!(FieldValue::text("42.5").to_f64(), Some(42.5));
        assert_eq!(FieldValue::Number(10.0).to_f64(), Some(10.0));
        assert_eq!(FieldValue::text("ten").to_f64(), None);
        assert_eq!(FieldValue::text("").to_f64(), None);
        assert_eq!(FieldValue::Bool(true).to_f64(), None);
        assert_eq!(FieldValue::Number(f64::INFINITY).to_f64(), None);
    }

    #[test]
    fn test_untagged_json() {
        let values: Vec<FieldValue> =
            serde_json::from_str(r#"[null, true, 3, "Yes"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FieldValue::Null,
                FieldValue::Bool(true),
                FieldValue::Number(3.0),
                FieldValue::text("Yes"),
            ]
        );
    }
}
