// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

use crate::birthday::{DateOfBirth, ParseError};

/// A point in time compared at day granularity.
pub trait Moment {
    /// The calendar date of this moment, time of day discarded.
    fn calendar_date(&self) -> NaiveDate;
}

impl Moment for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl Moment for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> Moment for DateTime<Tz> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl DateOfBirth {
    /// The date this birthday falls on in `year`.
    ///
    /// Feb 29 is celebrated on Feb 28 in common years.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        let day = if self.is_leap_day() && !is_leap_year(year) {
            28
        } else {
            self.day()
        };

        // Only years at the edge of the representable range can fail here
        NaiveDate::from_ymd_opt(year, self.month(), day).unwrap_or(if year < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
    }

    /// The next occurrence on or after the day of `now`.
    pub fn next_occurrence(&self, now: &impl Moment) -> NaiveDate {
        let today = now.calendar_date();
        let candidate = self.occurrence_in(today.year());
        if candidate < today {
            self.occurrence_in(today.year() + 1)
        } else {
            candidate
        }
    }

    /// Whole days from `now` until the next occurrence, `0` on the day itself.
    pub fn days_until_next(&self, now: &impl Moment) -> i64 {
        let today = now.calendar_date();
        (self.next_occurrence(&today) - today).num_days()
    }
}

/// Parses `dob` and returns its next occurrence on or after `now`.
pub fn next_occurrence(dob: &str, now: &impl Moment) -> Result<NaiveDate, ParseError> {
    let dob: DateOfBirth = dob.parse()?;
    Ok(dob.next_occurrence(now))
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
