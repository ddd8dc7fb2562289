//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Input format for birthdays, e.g. `01-01-2000`.
const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

/// A type-safe wrapper for birthdays.
///
/// A birthday is entered as a `DD-MM-YYYY` string and validated at
/// construction time by parsing it as a calendar date. The original
/// text and the parsed date are stored together; since the type is
/// immutable after construction they can never disagree.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("01-01-2000").unwrap();
/// assert_eq!(birthday.as_str(), "01-01-2000");
/// assert_eq!(birthday.date().to_string(), "2000-01-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the `DD-MM-YYYY` format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string does not
    /// parse as a day-month-year calendar date.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Get the birthday exactly as it was entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.raw
    }
}

// Serde support - serialize as the original string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - renders the original text, not the parsed date
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("15-10-1985").unwrap();
        assert_eq!(birthday.as_str(), "15-10-1985");
        assert_eq!(birthday.date().day(), 15);
        assert_eq!(birthday.date().month(), 10);
        assert_eq!(birthday.date().year(), 1985);
    }

    #[test]
    fn test_birthday_leap_day() {
        let birthday = Birthday::new("29-02-2000").unwrap();
        assert_eq!(birthday.date().day(), 29);
        assert_eq!(birthday.date().month(), 2);
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("2000-01-01").is_err()); // ISO order
        assert!(Birthday::new("01/01/2000").is_err()); // wrong separator
        assert!(Birthday::new("32-01-2000").is_err()); // day out of range
        assert!(Birthday::new("29-02-2001").is_err()); // not a leap year
        assert!(Birthday::new("not a date").is_err());
        assert!(Birthday::new("01-01-2000").is_ok());
    }

    #[test]
    fn test_birthday_display_preserves_input() {
        let birthday = Birthday::new("01-01-2000").unwrap();
        assert_eq!(format!("{}", birthday), "01-01-2000");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("01-01-2000").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"01-01-2000\"");
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"31-31-2000\"");
        assert!(result.is_err());
    }
}
