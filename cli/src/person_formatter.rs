// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use cake_core::{DateStyle, Upcoming};
use colored::Color;

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{OutputFormat, describe_position, position_color};

#[derive(Debug)]
pub struct PersonFormatter {
    columns: Vec<PersonColumn>,
    format: OutputFormat,
}

impl PersonFormatter {
    pub fn new(columns: Vec<PersonColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, list: &'a [Upcoming<'a>]) -> Table<'a, Upcoming<'a>, PersonColumn> {
        Table::new(self.format, &self.columns, list).with_color(highlight)
    }
}

fn highlight(upcoming: &Upcoming<'_>) -> Option<Color> {
    position_color(upcoming.position)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonColumn {
    Id,
    Name,
    FullName,
    Birthday(DateStyle),
    Next,
    When,
}

impl PersonColumn {
    pub fn id() -> Self {
        PersonColumn::Id
    }

    pub fn name() -> Self {
        PersonColumn::Name
    }

    pub fn full_name() -> Self {
        PersonColumn::FullName
    }

    pub fn birthday(style: DateStyle) -> Self {
        PersonColumn::Birthday(style)
    }

    pub fn next() -> Self {
        PersonColumn::Next
    }

    pub fn when() -> Self {
        PersonColumn::When
    }
}

impl<'p> TableColumn<Upcoming<'p>> for PersonColumn {
    fn key(&self) -> &'static str {
        match self {
            PersonColumn::Id => "id",
            PersonColumn::Name => "name",
            PersonColumn::FullName => "full_name",
            PersonColumn::Birthday(_) => "birthday",
            PersonColumn::Next => "next",
            PersonColumn::When => "when",
        }
    }

    fn format<'a>(&self, data: &'a Upcoming<'p>) -> Cow<'a, str> {
        match self {
            PersonColumn::Id => format!("#{}", data.person.id).into(),
            PersonColumn::Name => data.person.nickname().into(),
            PersonColumn::FullName => data.person.full_name().into(),
            PersonColumn::Birthday(style) => data.birthday.format(*style).into(),
            PersonColumn::Next => data.next.format("%Y-%m-%d").to_string().into(),
            PersonColumn::When => describe_position(data.position, data.days_until).into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            PersonColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use cake_core::{CelebrationWindow, Person, Roster};
    use chrono::NaiveDate;

    use super::*;

    fn roster() -> Roster {
        Roster::new(vec![
            Person {
                id: 1,
                username: Some("alice".to_string()),
                date_of_birth: Some("1990-06-01".to_string()),
                ..Default::default()
            },
            Person {
                id: 12,
                first_name: Some("Bob".to_string()),
                date_of_birth: Some("--09-15".to_string()),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn test_format_table() {
        colored::control::set_override(false);
        let roster = roster();
        let today = NaiveDate::from_ymd_opt(2024, 5, 28).unwrap();
        let list = roster.upcoming(&today, &CelebrationWindow::default());

        let formatter = PersonFormatter::new(vec![
            PersonColumn::id(),
            PersonColumn::name(),
            PersonColumn::birthday(DateStyle::Short),
            PersonColumn::when(),
        ]);
        let out = formatter.format(&list).to_string();
        assert_eq!(
            out,
            " #1 alice June 1       in 4 days\n#12 Bob   September 15 in 110 days"
        );
    }

    #[test]
    fn test_format_json() {
        let roster = roster();
        let today = NaiveDate::from_ymd_opt(2024, 5, 28).unwrap();
        let list = roster.upcoming(&today, &CelebrationWindow::default());

        let formatter = PersonFormatter::new(vec![PersonColumn::id(), PersonColumn::next()])
            .with_output_format(OutputFormat::Json);
        let out = formatter.format(&list).to_string();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"id": "#1", "next": "2024-06-01"},
                {"id": "#12", "next": "2024-09-15"},
            ])
        );
    }
}
