// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

use crate::util::OutputFormat;

pub trait TableColumn<T> {
    /// Key used for the column in JSON output.
    fn key(&self) -> &'static str;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Renders rows of `T` with the given columns, as padded text or as a JSON array.
pub struct Table<'a, T, C: TableColumn<T>> {
    format: OutputFormat,
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
    color: Option<fn(&T) -> Option<Color>>,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(format: OutputFormat, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            format,
            columns,
            data,
            separator: " ",
            color: None,
        }
    }

    /// Colors whole rows in table output.
    pub fn with_color(mut self, color: fn(&T) -> Option<Color>) -> Self {
        self.color = Some(color);
        self
    }

    fn fmt_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let widths = column_max_width(&rows, self.columns.len());
        for (i, (cells, data)) in rows.iter().zip(self.data).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            let mut line = String::new();
            for (j, (col, cell)) in self.columns.iter().zip(cells).enumerate() {
                let last = j == self.columns.len() - 1;
                let width = widths[j];
                match col.padding_direction() {
                    // Last column does not need padding if it's left-aligned
                    PaddingDirection::Left if last => line.push_str(cell),
                    PaddingDirection::Left => line.push_str(&pad(cell, width, true)),
                    PaddingDirection::Right => line.push_str(&pad(cell, width, false)),
                }
                if !last {
                    line.push_str(self.separator);
                }
            }

            match self.color.and_then(|color| color(data)) {
                Some(color) => write!(f, "{}", line.color(color))?,
                None => write!(f, "{line}")?,
            }
        }
        Ok(())
    }

    fn fmt_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<serde_json::Map<String, serde_json::Value>> = self
            .data
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|col| {
                        let value = serde_json::Value::String(col.format(row).into_owned());
                        (col.key().to_string(), value)
                    })
                    .collect()
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            OutputFormat::Json => self.fmt_json(f),
            OutputFormat::Table => self.fmt_table(f),
        }
    }
}

/// Pads by display width, so wide characters line up.
fn pad(cell: &str, width: usize, left: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match left {
        true => format!("{cell}{fill}"),
        false => format!("{fill}{cell}"),
    }
}

fn column_max_width(rows: &[Vec<Cow<'_, str>>], columns: usize) -> Vec<usize> {
    let mut max_width = vec![0; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            max_width[i] = max_width[i].max(cell.width());
        }
    }
    max_width
}
