// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::{Local, NaiveDateTime};

use crate::birthday::CelebrationWindow;
use crate::{Config, Roster, Upcoming};

/// Cake application core.
#[derive(Debug, Clone)]
pub struct Cake {
    now: NaiveDateTime,
    config: Config,
    roster: Roster,
}

impl Cake {
    /// Creates a new instance with the given configuration, anchored at the local time.
    pub async fn new(config: Config) -> Result<Self, Box<dyn Error>> {
        Self::with_now(config, Local::now().naive_local()).await
    }

    /// Creates a new instance anchored at the given moment.
    pub async fn with_now(mut config: Config, now: NaiveDateTime) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        let roster = Roster::load(&config.roster_path).await?;
        Ok(Self {
            now,
            config,
            roster,
        })
    }

    /// The moment all birthday computations are relative to.
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// The celebration window in use.
    pub fn window(&self) -> &CelebrationWindow {
        &self.config.window
    }

    /// The loaded person records.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Everyone with a birthday, soonest first.
    pub fn upcoming(&self) -> Vec<Upcoming<'_>> {
        self.roster.upcoming(&self.now, &self.config.window)
    }

    /// Everyone whose birthday is being celebrated now.
    pub fn celebrating(&self) -> Vec<Upcoming<'_>> {
        self.roster.celebrating(&self.now, &self.config.window)
    }
}
