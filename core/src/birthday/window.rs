// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate};

use crate::birthday::{DateOfBirth, Moment};

/// The range of days around a birthday during which it is flagged as imminent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct CelebrationWindow {
    /// Days before the birthday that are inside the window.
    pub lead_days: u32,

    /// Days after the birthday that are inside the window.
    pub trail_days: u32,

    /// If true, the occurrences of the previous and next year are also considered, so a
    /// Jan 2 birthday is upcoming on Dec 30.
    pub span_year_boundary: bool,
}

impl CelebrationWindow {
    /// Six days of lead-in, today included, makes a one week window.
    pub const DEFAULT_LEAD_DAYS: u32 = 6;

    /// Two days of trail-out after the birthday.
    pub const DEFAULT_TRAIL_DAYS: u32 = 2;

    /// Creates a window confined to the current year's occurrence.
    pub const fn new(lead_days: u32, trail_days: u32) -> Self {
        Self {
            lead_days,
            trail_days,
            span_year_boundary: false,
        }
    }

    /// Returns a copy that also looks at the neighbouring years' occurrences.
    pub const fn spanning_year_boundary(mut self, span: bool) -> Self {
        self.span_year_boundary = span;
        self
    }

    /// Classifies `now` relative to the birthday.
    pub fn position(&self, dob: &DateOfBirth, now: &impl Moment) -> WindowPosition {
        let today = now.calendar_date();
        let year = today.year();
        let years = match self.span_year_boundary {
            true => year - 1..=year + 1,
            false => year..=year,
        };

        years
            .map(|y| self.classify(dob.occurrence_in(y), today))
            .filter(WindowPosition::is_within)
            .min_by_key(WindowPosition::distance)
            .unwrap_or(WindowPosition::Outside)
    }

    /// Returns true if `now` falls inside the window around the birthday.
    pub fn contains(&self, dob: &DateOfBirth, now: &impl Moment) -> bool {
        self.position(dob, now).is_within()
    }

    /// Like [`CelebrationWindow::contains`], over a raw value from a person record.
    ///
    /// Absent, blank or malformed values are never inside the window.
    pub fn contains_raw(&self, dob: Option<&str>, now: &impl Moment) -> bool {
        match DateOfBirth::parse_optional(dob) {
            Some(Ok(dob)) => self.contains(&dob, now),
            Some(Err(e)) => {
                tracing::debug!(err = %e, "unparseable date of birth, treated as absent");
                false
            }
            None => false,
        }
    }

    fn classify(&self, occurrence: NaiveDate, today: NaiveDate) -> WindowPosition {
        let days_until = (occurrence - today).num_days();
        let days_since = -days_until;
        if days_until == 0 {
            WindowPosition::Today
        } else if (0..=i64::from(self.lead_days)).contains(&days_until) {
            WindowPosition::Upcoming { days: days_until }
        } else if (0..=i64::from(self.trail_days)).contains(&days_since) {
            WindowPosition::Recent { days: days_since }
        } else {
            WindowPosition::Outside
        }
    }
}

impl Default for CelebrationWindow {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEAD_DAYS, Self::DEFAULT_TRAIL_DAYS)
    }
}

/// Where a moment lies relative to a birthday's celebration window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPosition {
    /// The birthday is coming up in the given number of days.
    Upcoming { days: i64 },

    /// The birthday is today.
    Today,

    /// The birthday was the given number of days ago.
    Recent { days: i64 },

    /// Not inside the window.
    Outside,
}

impl WindowPosition {
    /// Returns true for every position but [`WindowPosition::Outside`].
    pub fn is_within(&self) -> bool {
        !matches!(self, WindowPosition::Outside)
    }

    fn distance(&self) -> i64 {
        match self {
            WindowPosition::Upcoming { days } | WindowPosition::Recent { days } => *days,
            WindowPosition::Today => 0,
            WindowPosition::Outside => i64::MAX,
        }
    }
}

/// Returns true if `now` is inside the default window of `dob`.
///
/// Absent or unparseable values yield false.
pub fn is_within_celebration_window(dob: Option<&str>, now: &impl Moment) -> bool {
    CelebrationWindow::default().contains_raw(dob, now)
}
