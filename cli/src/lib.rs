// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of cake.

mod cli;
mod cmd_check;
mod cmd_dashboard;
mod cmd_list;
mod cmd_show;
mod config;
mod person_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
