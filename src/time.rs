//! Calendar-month arithmetic used to window snapshot data.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::AdvisorError;

/// A calendar month expressed as `YYYY-MM`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, AdvisorError> {
        if !(1..=12).contains(&month) {
            return Err(AdvisorError::InvalidInput(format!(
                "month out of range: {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing the given date.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parses a `YYYY-MM` string.
    pub fn parse(raw: &str) -> Result<Self, AdvisorError> {
        let (year_part, month_part) = raw
            .split_once('-')
            .ok_or_else(|| AdvisorError::InvalidInput(format!("invalid month key: {}", raw)))?;
        let year = year_part
            .parse::<i32>()
            .map_err(|_| AdvisorError::InvalidInput(format!("invalid month key: {}", raw)))?;
        let month = month_part
            .parse::<u32>()
            .map_err(|_| AdvisorError::InvalidInput(format!("invalid month key: {}", raw)))?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn minus_months(self, months: u32) -> Self {
        (0..months).fold(self, |key, _| key.previous())
    }

    /// The inclusive first-to-last-day window of this month.
    pub fn window(self) -> MonthWindow {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap();
        let last =
            NaiveDate::from_ymd_opt(self.year, self.month, days_in_month(self.year, self.month))
                .unwrap();
        MonthWindow { first, last }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = AdvisorError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

/// An inclusive `[first-day, last-day]` window over one calendar month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthWindow {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl MonthWindow {
    /// The window of the month containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        MonthKey::of(date).window()
    }

    pub fn key(&self) -> MonthKey {
        MonthKey::of(self.first)
    }

    pub fn previous(&self) -> Self {
        self.key().previous().window()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first && date <= self.last
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}
