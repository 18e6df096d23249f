// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Birthday window calculator.
//!
//! Pure functions over a date of birth and an explicit "now". Nothing here reads the
//! system clock; callers pass the moment they want to compare against.

mod dob;
mod format;
mod occurrence;
mod window;

pub use dob::{DateOfBirth, ParseError};
pub use format::{DateStyle, format_display_date};
pub use occurrence::{Moment, next_occurrence};
pub use window::{CelebrationWindow, WindowPosition, is_within_celebration_window};
