// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::birthday::{DateOfBirth, ParseError};

/// How a date of birth is rendered for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DateStyle {
    /// Month name and day, e.g. `June 1`.
    #[default]
    Short,

    /// Month name, day and year, e.g. `June 1, 1990`. Falls back to [`DateStyle::Short`]
    /// when the year is a placeholder.
    Full,

    /// Month name and year, e.g. `June 1990`.
    MonthYear,
}

impl DateOfBirth {
    /// Renders the date of birth in the given style.
    pub fn format(&self, style: DateStyle) -> String {
        let date = self.as_date();
        let pattern = match (style, self.year().is_some()) {
            (DateStyle::Short, _) | (DateStyle::Full, false) => "%B %-d",
            (DateStyle::Full, true) => "%B %-d, %Y",
            (DateStyle::MonthYear, true) => "%B %Y",
            (DateStyle::MonthYear, false) => "%B",
        };
        date.format(pattern).to_string()
    }
}

/// Formats a raw date of birth from a person record.
///
/// Absent or blank values format as an empty string; malformed ones are an error.
pub fn format_display_date(dob: Option<&str>, style: DateStyle) -> Result<String, ParseError> {
    match DateOfBirth::parse_optional(dob) {
        Some(dob) => Ok(dob?.format(style)),
        None => Ok(String::new()),
    }
}
