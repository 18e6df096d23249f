// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Component, Path, PathBuf};

use crate::birthday::CelebrationWindow;

/// The name of the cake application.
pub const APP_NAME: &str = "cake";

/// Longest lead or trail accepted for the celebration window.
const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the cake application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Path to the JSON file holding the person records.
    pub roster_path: PathBuf,

    /// The window around a birthday during which it is flagged.
    #[serde(default)]
    pub window: CelebrationWindow,
}

impl Config {
    /// Creates a configuration with the default window.
    pub fn new(roster_path: impl Into<PathBuf>) -> Self {
        Self {
            roster_path: roster_path.into(),
            window: CelebrationWindow::default(),
        }
    }

    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        self.roster_path = expand_home(&self.roster_path)?;

        for (name, days) in [
            ("lead_days", self.window.lead_days),
            ("trail_days", self.window.trail_days),
        ] {
            if days > MAX_WINDOW_DAYS {
                return Err(format!(
                    "Invalid window.{name}: {days}, must not exceed {MAX_WINDOW_DAYS}"
                )
                .into());
            }
        }

        Ok(())
    }
}

/// Replaces a leading `~` or `$HOME` component of the roster path with the home directory.
///
/// Anything else, `~alice/` included, is kept as written.
fn expand_home(roster_path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let mut components = roster_path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" || first == "$HOME" => {
            let home = dirs::home_dir().ok_or_else(|| {
                format!(
                    "Cannot expand roster path {}: home directory not found",
                    roster_path.display()
                )
            })?;
            Ok(home.join(components.as_path()))
        }
        _ => Ok(roster_path.to_owned()),
    }
}
