// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use cake_core::{Cake, CelebrationWindow, DateStyle, Moment, Person};
use clap::{ArgMatches, Command, arg};
use colored::Colorize;

use crate::util::{OutputFormat, describe_position, position_color};

#[derive(Debug, Clone)]
pub struct CmdShow {
    pub id: String,
    pub output_format: OutputFormat,
}

impl CmdShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the profile of a person")
            .arg(arg!(id: <ID> "The id of the person, e.g. 12 or #12"))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let id = matches
            .get_one::<String>("id")
            .expect("id is required")
            .clone();

        Self {
            id,
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, cake: &Cake) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing person...");
        let id = parse_id(&self.id)?;
        let person = cake
            .roster()
            .get(id)
            .ok_or_else(|| format!("Person not found: #{id}"))?;

        match self.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(person)?),
            OutputFormat::Table => println!("{}", profile(person, cake.window(), &cake.now())),
        }
        Ok(())
    }
}

fn parse_id(s: &str) -> Result<u64, Box<dyn Error>> {
    let trimmed = s.trim();
    trimmed
        .strip_prefix('#')
        .unwrap_or(trimmed)
        .parse::<u64>()
        .map_err(|e| format!("Invalid id '{s}': {e}").into())
}

/// Renders the profile card, highlighting the birthday line inside the window.
fn profile(person: &Person, window: &CelebrationWindow, now: &impl Moment) -> String {
    let mut lines = vec![format!("#{} {}", person.id, person.full_name().bold())];

    let birthday = match person.birthday() {
        Some(Ok(dob)) => {
            let position = window.position(&dob, now);
            let line = format!(
                "🎂 {} ({})",
                dob.format(DateStyle::Short),
                describe_position(position, dob.days_until_next(now))
            );
            match position_color(position) {
                Some(color) => line.color(color).to_string(),
                None => line,
            }
        }
        Some(Err(e)) => {
            tracing::warn!(id = person.id, err = %e, "malformed date of birth");
            format!("🎂 {}", "invalid birthday".italic())
        }
        None => format!("🎂 {}", "no birthday provided".italic()),
    };
    lines.push(birthday);

    if let Some(email) = &person.email {
        lines.push(format!("📧 {email}"));
    }
    if let Some(avatar) = person.avatar() {
        lines.push(format!("🖼️ {avatar}"));
    }
    lines.join("\n")
}
