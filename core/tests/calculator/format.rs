// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Display formatting integration tests.

use cake_core::{DateStyle, ParseError, format_display_date};

#[test]
fn format_short_and_full() {
    let dob = Some("1990-06-01");
    assert_eq!(format_display_date(dob, DateStyle::Short).unwrap(), "June 1");
    assert_eq!(format_display_date(dob, DateStyle::Full).unwrap(), "June 1, 1990");
}

#[test]
fn format_absent_is_empty_for_every_style() {
    assert_eq!(format_display_date(None, DateStyle::Short).unwrap(), "");
    assert_eq!(format_display_date(None, DateStyle::Full).unwrap(), "");
    assert_eq!(format_display_date(None, DateStyle::MonthYear).unwrap(), "");
}

#[test]
fn format_placeholder_year_drops_year() {
    let dob = Some("--11-05");
    assert_eq!(format_display_date(dob, DateStyle::Full).unwrap(), "November 5");
    assert_eq!(format_display_date(dob, DateStyle::MonthYear).unwrap(), "November");
}

#[test]
fn format_malformed_is_parse_error() {
    assert_eq!(
        format_display_date(Some("1990-04-31"), DateStyle::Short),
        Err(ParseError::Day { month: 4, day: 31 })
    );
}
