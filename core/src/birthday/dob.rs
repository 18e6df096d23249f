// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr, sync::OnceLock};

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::de;

/// Year used to hold month and day when the real year is unknown. A leap year, so that
/// `--02-29` is representable.
const PLACEHOLDER_YEAR: i32 = 2000;

/// Errors raised when a date of birth does not follow the expected lexical pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The value is not `YYYY-MM-DD`, `-MM-DD` or `--MM-DD`.
    #[error("Invalid date of birth '{0}', expected YYYY-MM-DD or --MM-DD")]
    Pattern(String),

    /// Month outside `1..=12`.
    #[error("Month {0} is out of range, expected 1 to 12")]
    Month(u32),

    /// Day that does not exist in the given month.
    #[error("Day {day} is out of range for month {month}")]
    Day {
        /// Month of the rejected date.
        month: u32,
        /// The rejected day.
        day: u32,
    },
}

/// A date of birth as stored on a person record.
///
/// Only month and day take part in recurrence. The year is kept for display and may be a
/// placeholder, written as `--06-01` (or `-06-01`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateOfBirth {
    date: NaiveDate,
    has_year: bool,
}

impl DateOfBirth {
    /// Creates a date of birth, validating month and day.
    ///
    /// Feb 29 is accepted for a placeholder year and for real leap years only.
    pub fn new(year: Option<i32>, month: u32, day: u32) -> Result<Self, ParseError> {
        if !(1..=12).contains(&month) {
            return Err(ParseError::Month(month));
        }

        let date = NaiveDate::from_ymd_opt(year.unwrap_or(PLACEHOLDER_YEAR), month, day)
            .ok_or(ParseError::Day { month, day })?;

        Ok(Self {
            date,
            has_year: year.is_some(),
        })
    }

    /// Parses an optional lexical value, treating `None` and blank strings as absent.
    pub fn parse_optional(s: Option<&str>) -> Option<Result<Self, ParseError>> {
        match s.map(str::trim) {
            None | Some("") => None,
            Some(s) => Some(s.parse()),
        }
    }

    /// The year of birth, `None` when it is a placeholder.
    pub fn year(&self) -> Option<i32> {
        self.has_year.then(|| self.date.year())
    }

    /// The month, in `1..=12`.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// The day of month.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Returns true for Feb 29.
    pub fn is_leap_day(&self) -> bool {
        self.date.month() == 2 && self.date.day() == 29
    }

    /// The date with its stored year, placeholder year included.
    pub(crate) fn as_date(&self) -> NaiveDate {
        self.date
    }
}

impl FromStr for DateOfBirth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const RE: &str = r"^(\d{4}|-?)-(\d{2})-(\d{2})$";
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

        let trimmed = s.trim();
        let captures = re
            .captures(trimmed)
            .ok_or_else(|| ParseError::Pattern(s.to_string()))?;

        let invalid = |_| ParseError::Pattern(s.to_string());
        let year = match &captures[1] {
            "" | "-" => None,
            y => Some(y.parse::<i32>().map_err(invalid)?),
        };
        let month = captures[2].parse::<u32>().map_err(invalid)?;
        let day = captures[3].parse::<u32>().map_err(invalid)?;
        Self::new(year, month, day)
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year() {
            Some(year) => write!(f, "{:04}-{:02}-{:02}", year, self.month(), self.day()),
            None => write!(f, "--{:02}-{:02}", self.month(), self.day()),
        }
    }
}

impl serde::Serialize for DateOfBirth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for DateOfBirth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DateOfBirthVisitor;

        impl de::Visitor<'_> for DateOfBirthVisitor {
            type Value = DateOfBirth;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a date of birth like "1990-06-01" or "--06-01""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(DateOfBirthVisitor)
    }
}
