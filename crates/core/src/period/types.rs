//! Reporting period types.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::PeriodError;
use super::month::Month;

/// Latest year a period may carry.
pub const MAX_YEAR: i32 = 9999;

/// A validated (month, year) reporting window.
///
/// Calendar bounds are computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    month: Month,
    year: i32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl Period {
    /// Builds a period from a month ordinal and a year.
    pub fn try_new(month: u32, year: i32) -> Result<Self, PeriodError> {
        let month = Month::from_number(month).ok_or(PeriodError::InvalidMonth(month))?;
        Self::of(month, year)
    }

    /// Builds a period for a known month.
    pub fn of(month: Month, year: i32) -> Result<Self, PeriodError> {
        if !(1..=MAX_YEAR).contains(&year) {
            return Err(PeriodError::InvalidYear(year.to_string()));
        }
        let first_day = NaiveDate::from_ymd_opt(year, month.number(), 1)
            .ok_or_else(|| PeriodError::InvalidYear(year.to_string()))?;
        let last_day = first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| PeriodError::InvalidYear(year.to_string()))?;

        Ok(Self {
            month,
            year,
            first_day,
            last_day,
        })
    }

    /// Builds a period from its persisted form: canonical month name and year text.
    ///
    /// Both parts are strict: unknown names and non-digit years are rejected.
    pub fn from_names(month_name: &str, year_text: &str) -> Result<Self, PeriodError> {
        let month = Month::from_name(month_name.trim())
            .ok_or_else(|| PeriodError::UnknownMonthName(month_name.to_string()))?;
        Self::of(month, parse_year(year_text)?)
    }

    /// Period containing `date`.
    pub fn containing(date: NaiveDate) -> Result<Self, PeriodError> {
        Self::try_new(date.month(), date.year())
    }

    /// The month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// The year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// First calendar day of the month.
    #[must_use]
    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Last calendar day of the month.
    #[must_use]
    pub const fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Whether `date` falls inside the month.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.first_day..=self.last_day).contains(&date)
    }

    /// Human label, e.g. `Mars 2024`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }

    /// Persisted form of this period.
    #[must_use]
    pub fn to_stored(&self) -> StoredPeriod {
        StoredPeriod {
            month_name: self.month.name().to_string(),
            year: self.year.to_string(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// The singleton period record as persisted: month name and year text.
///
/// Values are kept verbatim; a corrupted record is only rejected when it is
/// turned into a [`Period`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPeriod {
    /// Month name, e.g. `Mars`.
    pub month_name: String,
    /// Year text, e.g. `2024`.
    pub year: String,
}

impl StoredPeriod {
    /// Creates a record from raw values.
    pub fn new(month_name: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            month_name: month_name.into(),
            year: year.into(),
        }
    }
}

/// Parses a year made of ASCII digits only.
pub fn parse_year(text: &str) -> Result<i32, PeriodError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PeriodError::InvalidYear(text.to_string()));
    }
    trimmed
        .parse::<i32>()
        .ok()
        .filter(|year| (1..=MAX_YEAR).contains(year))
        .ok_or_else(|| PeriodError::InvalidYear(text.to_string()))
}
