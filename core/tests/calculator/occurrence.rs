// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Next occurrence integration tests.

use cake_core::{DateOfBirth, next_occurrence};
use chrono::{Local, TimeZone};

use super::{date, days};

#[test]
fn next_occurrence_before_birthday_stays_in_year() {
    let next = next_occurrence("1990-06-01", &date(2024, 5, 28)).unwrap();
    assert_eq!(next, date(2024, 6, 1));
}

#[test]
fn next_occurrence_after_birthday_rolls_forward() {
    let next = next_occurrence("1990-06-01", &date(2024, 6, 4)).unwrap();
    assert_eq!(next, date(2025, 6, 1));
}

#[test]
fn next_occurrence_accepts_placeholder_year() {
    let next = next_occurrence("-06-01", &date(2024, 6, 4)).unwrap();
    assert_eq!(next, date(2025, 6, 1));
}

#[test]
fn next_occurrence_accepts_local_datetime() {
    let now = Local.with_ymd_and_hms(2024, 6, 1, 23, 30, 0).unwrap();
    let next = next_occurrence("1990-06-01", &now).unwrap();
    assert_eq!(next, date(2024, 6, 1));
}

#[test]
fn next_occurrence_rejects_malformed_input() {
    assert!(next_occurrence("", &date(2024, 1, 1)).is_err());
    assert!(next_occurrence("1990-02-30", &date(2024, 1, 1)).is_err());
    assert!(next_occurrence("06/01/1990", &date(2024, 1, 1)).is_err());
}

#[test]
fn next_occurrence_is_never_before_now() {
    let dob: DateOfBirth = "1988-02-29".parse().unwrap();
    for today in days(date(2023, 1, 1), date(2025, 12, 31)) {
        assert!(dob.next_occurrence(&today) >= today, "today = {today}");
    }
}

#[test]
fn next_occurrence_is_idempotent() {
    let dob: DateOfBirth = "1990-06-01".parse().unwrap();
    let now = date(2024, 6, 4);
    assert_eq!(dob.next_occurrence(&now), dob.next_occurrence(&now));

    let next = dob.next_occurrence(&now);
    assert_eq!(dob.next_occurrence(&next), next);
}
