// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use cake_core::{Cake, DateStyle};
use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;

use crate::person_formatter::{PersonColumn, PersonFormatter};
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdList {
    pub output_format: OutputFormat,
    pub limit: Option<usize>,
}

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List everyone's birthday, soonest first")
            .arg(
                arg!(-n --limit <N> "Show at most N people")
                    .required(false)
                    .value_parser(value_parser!(usize)),
            )
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: OutputFormat::from(matches),
            limit: matches.get_one("limit").copied(),
        }
    }

    pub async fn run(self, cake: &Cake) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing birthdays...");

        let mut list = cake.upcoming();
        if let Some(limit) = self.limit {
            list.truncate(limit);
        }

        if list.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No birthdays found".italic());
            return Ok(());
        }

        let columns = vec![
            PersonColumn::id(),
            PersonColumn::name(),
            PersonColumn::birthday(DateStyle::Short),
            PersonColumn::next(),
            PersonColumn::when(),
        ];
        let formatter = PersonFormatter::new(columns).with_output_format(self.output_format);
        println!("{}", formatter.format(&list));
        Ok(())
    }
}
