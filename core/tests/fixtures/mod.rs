// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Roster fixtures for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;
use tokio::fs;

/// A roster of six: three birthdays around 2024-06-01, one far away, one without a
/// birthday and one malformed.
pub const ROSTER_JSON: &str = r#"[
  {"id": 1, "username": "alice", "email": "alice@example.com", "date_of_birth": "1990-06-01"},
  {"id": 2, "first_name": "Bob", "last_name": "Builder", "date_of_birth": "--05-30"},
  {"id": 3, "username": "carol", "date_of_birth": "1985-12-24",
   "social_auth": [{"picture": "https://example.com/carol.png"}]},
  {"id": 4, "username": "dave"},
  {"id": 5, "username": "eve", "date_of_birth": "1990-02-30"},
  {"id": 6, "username": "frank", "date_of_birth": "2001-06-05"}
]"#;

/// A temporary directory holding a roster file, removed on drop.
#[derive(Debug)]
pub struct TestRoster {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestRoster {
    pub async fn with(content: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("friends.json");
        fs::write(&path, content).await.unwrap();
        Self { _dir: dir, path }
    }

    pub async fn new() -> Self {
        Self::with(ROSTER_JSON).await
    }
}
