// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use cake_core::{Cake, CelebrationWindow, DateStyle, Upcoming};
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::person_formatter::{PersonColumn, PersonFormatter};

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard;

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Show the birthdays being celebrated around today")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdDashboard
    }

    /// Show everyone inside their celebration window.
    pub async fn run(self, cake: &Cake) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");
        println!("{}", render(cake.window(), &cake.celebrating()));
        Ok(())
    }
}

fn render(window: &CelebrationWindow, celebrating: &[Upcoming<'_>]) -> String {
    let header = format!(
        "🎂 {}",
        format!(
            "Birthdays: {} days ahead, {} days behind",
            window.lead_days, window.trail_days
        )
        .bold()
    );

    if celebrating.is_empty() {
        return format!("{header}\n{}", "No birthdays around today".italic());
    }

    let columns = vec![
        PersonColumn::id(),
        PersonColumn::full_name(),
        PersonColumn::birthday(DateStyle::Short),
        PersonColumn::when(),
    ];
    let formatter = PersonFormatter::new(columns);
    format!("{header}\n{}", formatter.format(celebrating))
}
