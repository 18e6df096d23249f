// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core library of cake: birthday windows, person records and configuration.

mod birthday;
mod cake;
mod config;
mod person;
mod roster;

pub use crate::birthday::{
    CelebrationWindow, DateOfBirth, DateStyle, Moment, ParseError, WindowPosition,
    format_display_date, is_within_celebration_window, next_occurrence,
};
pub use crate::cake::Cake;
pub use crate::config::{APP_NAME, Config};
pub use crate::person::{Person, SocialAuth};
pub use crate::roster::{Roster, Upcoming};
