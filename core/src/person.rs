// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::birthday::{CelebrationWindow, DateOfBirth, Moment, ParseError};

/// A person record, as returned by the user-record provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Person {
    /// Identifier of the record.
    pub id: u64,

    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Username, used as the nickname when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Raw date of birth, e.g. `1990-06-01` or `--06-01`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    /// Linked social accounts, the first picture is the avatar.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub social_auth: Vec<SocialAuth>,
}

/// A social account linked to a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SocialAuth {
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl Person {
    /// Full name as `First "username" Last`, skipping missing parts.
    pub fn full_name(&self) -> String {
        let username = non_empty(&self.username).map(|a| format!("\"{a}\""));
        [
            non_empty(&self.first_name).map(str::to_string),
            username,
            non_empty(&self.last_name).map(str::to_string),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Short name: the username, else `First Last`, else the email, else `#id`.
    pub fn nickname(&self) -> String {
        if let Some(username) = non_empty(&self.username) {
            return username.to_string();
        }

        let name = [non_empty(&self.first_name), non_empty(&self.last_name)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        if !name.is_empty() {
            name
        } else if let Some(email) = non_empty(&self.email) {
            email.to_string()
        } else {
            format!("#{}", self.id)
        }
    }

    /// The avatar URL: the first non-empty picture among the linked accounts.
    pub fn avatar(&self) -> Option<&str> {
        self.social_auth
            .iter()
            .filter_map(|a| a.picture.as_deref())
            .find(|a| !a.trim().is_empty())
    }

    /// The parsed date of birth, `None` if absent.
    pub fn birthday(&self) -> Option<Result<DateOfBirth, ParseError>> {
        DateOfBirth::parse_optional(self.date_of_birth.as_deref())
    }

    /// Returns true if `now` is inside the window around this person's birthday.
    pub fn is_celebrating(&self, window: &CelebrationWindow, now: &impl Moment) -> bool {
        window.contains_raw(self.date_of_birth.as_deref(), now)
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|a| !a.is_empty())
}
