// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Celebration window integration tests.

use cake_core::{CelebrationWindow, DateOfBirth, WindowPosition, is_within_celebration_window};

use super::{date, days};

#[test]
fn window_four_days_before_is_inside() {
    assert!(is_within_celebration_window(Some("1990-06-01"), &date(2024, 5, 28)));
}

#[test]
fn window_two_days_after_is_inside() {
    assert!(is_within_celebration_window(Some("1990-06-01"), &date(2024, 6, 3)));
}

#[test]
fn window_three_days_after_is_outside() {
    assert!(!is_within_celebration_window(Some("1990-06-01"), &date(2024, 6, 4)));
}

#[test]
fn window_boundaries_are_exact() {
    let dob = Some("1990-06-01");
    assert!(is_within_celebration_window(dob, &date(2024, 5, 26))); // 6 days until
    assert!(!is_within_celebration_window(dob, &date(2024, 5, 25))); // 7 days until
    assert!(is_within_celebration_window(dob, &date(2024, 6, 3))); // 2 days since
    assert!(!is_within_celebration_window(dob, &date(2024, 6, 4))); // 3 days since
}

#[test]
fn window_contains_the_birthday_itself() {
    let window = CelebrationWindow::default();
    for s in ["1990-01-01", "1990-06-15", "1971-12-31", "--02-29", "2004-02-29"] {
        let dob: DateOfBirth = s.parse().unwrap();
        for year in 2020..=2030 {
            let day = dob.occurrence_in(year);
            assert_eq!(window.position(&dob, &day), WindowPosition::Today, "dob = {s}");
        }
    }
}

#[test]
fn window_covers_nine_days_per_year() {
    let dob: DateOfBirth = "1990-06-01".parse().unwrap();
    let window = CelebrationWindow::default();
    let inside = days(date(2024, 1, 1), date(2024, 12, 31))
        .filter(|d| window.contains(&dob, d))
        .count();
    assert_eq!(inside, 9);
}

#[test]
fn window_absent_or_malformed_is_outside() {
    let today = date(2024, 6, 1);
    assert!(!is_within_celebration_window(None, &today));
    assert!(!is_within_celebration_window(Some(""), &today));
    assert!(!is_within_celebration_window(Some("yesterday"), &today));
    assert!(!is_within_celebration_window(Some("1990-13-01"), &today));
}
