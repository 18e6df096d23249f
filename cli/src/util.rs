// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use cake_core::WindowPosition;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Arg, ArgMatches, arg, value_parser};
use colored::Color;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

/// Resolves the `--today` override into the moment used for all computations.
pub fn resolve_now(today: Option<NaiveDate>) -> NaiveDateTime {
    match today {
        Some(date) => NaiveDateTime::new(date, NaiveTime::MIN),
        None => Local::now().naive_local(),
    }
}

/// Human readable distance, e.g. `in 3 days`, `today`, `2 days ago`.
pub fn describe_position(position: WindowPosition, days_until: i64) -> String {
    match position {
        WindowPosition::Today => "today".to_string(),
        WindowPosition::Upcoming { days: 1 } => "tomorrow".to_string(),
        WindowPosition::Recent { days: 1 } => "yesterday".to_string(),
        WindowPosition::Upcoming { days } => format!("in {days} days"),
        WindowPosition::Recent { days } => format!("{days} days ago"),
        WindowPosition::Outside => describe_days_until(days_until),
    }
}

/// Distance to a coming date, e.g. `today`, `tomorrow`, `in 363 days`.
pub fn describe_days_until(days_until: i64) -> String {
    match days_until {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        n => format!("in {n} days"),
    }
}

/// Highlight color for a birthday, `None` outside the celebration window.
pub fn position_color(position: WindowPosition) -> Option<Color> {
    match position {
        WindowPosition::Today => Some(Color::Red),
        WindowPosition::Upcoming { .. } => Some(Color::Yellow),
        WindowPosition::Recent { .. } => Some(Color::Cyan),
        WindowPosition::Outside => None,
    }
}
