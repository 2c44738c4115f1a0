//! Calendar month value used for start, end, due, and target months.
//!
//! Months travel as zero-padded `YYYY-MM` strings. Parsing is strict so that
//! ordering is always calendar ordering: `2026-1` or `2026-13` are rejected
//! instead of being compared lexically.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A calendar month. Orders by year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: u16,
    month: u8,
}

impl YearMonth {
    /// Build a month from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `year` is not four digits or
    /// `month` is outside `1..=12`.
    pub fn new(year: u16, month: u8) -> Result<Self, CoreError> {
        if year > 9999 {
            return Err(CoreError::Validation(format!(
                "year must have four digits, got {year}"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(CoreError::Validation(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        Ok(Self { year, month })
    }

    /// The month a timestamp falls in (UTC).
    #[must_use]
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        // chrono months are always 1..=12; years outside 0..=9999 are clamped.
        let year = u16::try_from(at.year().clamp(0, 9999)).unwrap_or(9999);
        let month = u8::try_from(at.month()).unwrap_or(1);
        Self { year, month }
    }

    /// The current UTC month.
    #[must_use]
    pub fn current() -> Self {
        Self::from_datetime(Utc::now())
    }

    #[must_use]
    pub const fn year(self) -> u16 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::Validation(format!("expected month as YYYY-MM, got '{value}'"));

        let (year, month) = value.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year = year.parse::<u16>().map_err(|_| invalid())?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

impl JsonSchema for YearMonth {
    fn schema_name() -> Cow<'static, str> {
        "YearMonth".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^[0-9]{4}-(0[1-9]|1[0-2])$",
        })
    }
}
