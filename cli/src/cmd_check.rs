// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use cake_core::{CelebrationWindow, DateOfBirth, DateStyle, Moment};
use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;

use crate::util::{OutputFormat, describe_days_until, describe_position, position_color};

/// Runs the calculator on a literal date of birth, without a config or roster.
#[derive(Debug, Clone)]
pub struct CmdCheck {
    pub dob: String,
    pub style: DateStyle,
    pub output_format: OutputFormat,
}

impl CmdCheck {
    pub const NAME: &str = "check";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Check a date of birth against today")
            .arg(arg!(dob: <DOB> "Date of birth, e.g. 1990-06-01 or --06-01"))
            .arg(
                arg!(-s --style <STYLE> "Display style of the birthday")
                    .value_parser(value_parser!(DateStyle))
                    .default_value("full"),
            )
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            dob: matches
                .get_one::<String>("dob")
                .expect("dob is required")
                .clone(),
            style: matches.get_one("style").copied().unwrap_or_default(),
            output_format: OutputFormat::from(matches),
        }
    }

    pub fn run(self, now: &impl Moment) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking date of birth...");
        let dob: DateOfBirth = self.dob.parse()?;
        println!("{}", self.report(&dob, &CelebrationWindow::default(), now)?);
        Ok(())
    }

    fn report(
        &self,
        dob: &DateOfBirth,
        window: &CelebrationWindow,
        now: &impl Moment,
    ) -> Result<String, Box<dyn Error>> {
        let next = dob.next_occurrence(now);
        let days_until = dob.days_until_next(now);
        let position = window.position(dob, now);

        Ok(match self.output_format {
            OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
                "date_of_birth": dob,
                "display": dob.format(self.style),
                "next": next.format("%Y-%m-%d").to_string(),
                "days_until": days_until,
                "celebrating": position.is_within(),
            }))?,
            OutputFormat::Table => {
                let celebrating = match position_color(position) {
                    Some(color) => format!("yes, {}", describe_position(position, days_until))
                        .color(color)
                        .to_string(),
                    None => "no".to_string(),
                };
                format!(
                    "{:<12}{}\n{:<12}{} ({})\n{:<12}{}",
                    "Birthday:",
                    dob.format(self.style),
                    "Next:",
                    next.format("%Y-%m-%d"),
                    describe_days_until(days_until),
                    "Celebrate:",
                    celebrating
                )
            }
        })
    }
}
