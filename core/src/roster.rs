// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::Path, str::FromStr};

use chrono::NaiveDate;
use tokio::fs;

use crate::Person;
use crate::birthday::{CelebrationWindow, DateOfBirth, Moment, WindowPosition};

/// The people known to the application, read from a JSON array of person records.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    /// Creates a roster from the given records.
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Loads the roster from a JSON file.
    #[tracing::instrument]
    pub async fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let roster = fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read roster file at {}: {e}", path.display()))?
            .parse::<Roster>()
            .map_err(|e| format!("Failed to parse roster file at {}: {e}", path.display()))?;

        tracing::debug!(count = roster.people.len(), "roster loaded");
        Ok(roster)
    }

    /// All person records, in file order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Finds a person by id.
    pub fn get(&self, id: u64) -> Option<&Person> {
        self.people.iter().find(|a| a.id == id)
    }

    /// Everyone with a valid birthday, soonest next occurrence first.
    ///
    /// People without a birthday are skipped, as are malformed birthdays after a warning.
    pub fn upcoming(&self, now: &impl Moment, window: &CelebrationWindow) -> Vec<Upcoming<'_>> {
        let today = now.calendar_date();
        let mut list: Vec<_> = self
            .people
            .iter()
            .filter_map(|person| match person.birthday()? {
                Ok(birthday) => Some(Upcoming::new(person, birthday, today, window)),
                Err(e) => {
                    tracing::warn!(id = person.id, err = %e, "skipping malformed date of birth");
                    None
                }
            })
            .collect();

        list.sort_by_cached_key(|a| (a.next, a.person.nickname()));
        list
    }

    /// Everyone whose birthday window contains `now`, soonest first.
    pub fn celebrating(&self, now: &impl Moment, window: &CelebrationWindow) -> Vec<Upcoming<'_>> {
        let mut list: Vec<_> = self
            .upcoming(now, window)
            .into_iter()
            .filter(|a| a.position.is_within())
            .collect();

        // Recent birthdays roll to next year, keep them ahead of the upcoming ones
        list.sort_by_key(|a| match a.position {
            WindowPosition::Recent { days } => -days,
            WindowPosition::Upcoming { days } => days,
            WindowPosition::Today | WindowPosition::Outside => 0,
        });
        list
    }
}

impl FromStr for Roster {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map(Self::new)
    }
}

/// A person together with their computed birthday data.
#[derive(Debug, Clone)]
pub struct Upcoming<'a> {
    /// The person record.
    pub person: &'a Person,

    /// The parsed date of birth.
    pub birthday: DateOfBirth,

    /// The next occurrence on or after today.
    pub next: NaiveDate,

    /// Days from today until `next`.
    pub days_until: i64,

    /// Position of today relative to the celebration window.
    pub position: WindowPosition,
}

impl<'a> Upcoming<'a> {
    fn new(
        person: &'a Person,
        birthday: DateOfBirth,
        today: NaiveDate,
        window: &CelebrationWindow,
    ) -> Self {
        let next = birthday.next_occurrence(&today);
        Self {
            person,
            birthday,
            next,
            days_until: (next - today).num_days(),
            position: window.position(&birthday, &today),
        }
    }
}
