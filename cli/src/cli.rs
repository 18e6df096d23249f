// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use cake_core::{APP_NAME, Cake};
use chrono::NaiveDate;
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_check::CmdCheck;
use crate::cmd_dashboard::CmdDashboard;
use crate::cmd_list::CmdList;
use crate::cmd_show::CmdShow;
use crate::config::parse_config;
use crate::util::resolve_now;

/// Run the cake command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Override for today's date
    pub today: Option<NaiveDate>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Never miss a friend's birthday.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to dashboard
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/cake/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/cake/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(--today [DATE] "Pretend today is the given date, e.g. 2024-06-01")
                    .value_parser(value_parser!(NaiveDate))
                    .global(true),
            )
            .subcommand(CmdDashboard::command())
            .subcommand(CmdList::command())
            .subcommand(CmdShow::command())
            .subcommand(CmdCheck::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let (command, today) = match matches.subcommand() {
            Some((CmdDashboard::NAME, matches)) => {
                (Dashboard(CmdDashboard::from(matches)), today_of(matches))
            }
            Some((CmdList::NAME, matches)) => (List(CmdList::from(matches)), today_of(matches)),
            Some((CmdShow::NAME, matches)) => (Show(CmdShow::from(matches)), today_of(matches)),
            Some((CmdCheck::NAME, matches)) => (Check(CmdCheck::from(matches)), today_of(matches)),
            None => (Dashboard(CmdDashboard), today_of(&matches)),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli {
            config,
            today,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config, self.today).await
    }
}

fn today_of(matches: &ArgMatches) -> Option<NaiveDate> {
    matches.get_one("today").copied()
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the birthdays around today
    Dashboard(CmdDashboard),

    /// List everyone's birthday
    List(CmdList),

    /// Show one person
    Show(CmdShow),

    /// Check a literal date of birth
    Check(CmdCheck),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>, today: Option<NaiveDate>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Dashboard(a) => Self::run_with(config, today, |x| a.run(x).boxed()).await,
            List(a)      => Self::run_with(config, today, |x| a.run(x).boxed()).await,
            Show(a)      => Self::run_with(config, today, |x| a.run(x).boxed()).await,
            Check(a)     => a.run(&resolve_now(today)),
        }
    }

    async fn run_with<F>(
        config: Option<PathBuf>,
        today: Option<NaiveDate>,
        f: F,
    ) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Cake) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let core_config = parse_config(config).await?;
        let cake = match today {
            None => Cake::new(core_config).await?,
            today => Cake::with_now(core_config, resolve_now(today)).await?,
        };
        f(&cake).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::OutputFormat;
    use cake_core::DateStyle;

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert_eq!(cli.today, None);
        assert!(matches!(cli.command, Commands::Dashboard(_)));
    }

    #[test]
    fn test_parse_default_dashboard() {
        let cli = Cli::try_parse_from(vec!["test"]).unwrap();
        assert!(matches!(cli.command, Commands::Dashboard(_)));
    }

    #[test]
    fn test_parse_dashboard() {
        let cli = Cli::try_parse_from(vec!["test", "dashboard"]).unwrap();
        assert!(matches!(cli.command, Commands::Dashboard(_)));
    }

    #[test]
    fn test_parse_today() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 28);

        let cli = Cli::try_parse_from(vec!["test", "--today", "2024-05-28"]).unwrap();
        assert_eq!(cli.today, expected);
        assert!(matches!(cli.command, Commands::Dashboard(_)));

        let cli = Cli::try_parse_from(vec!["test", "list", "--today", "2024-05-28"]).unwrap();
        assert_eq!(cli.today, expected);
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_parse_invalid_today() {
        assert!(Cli::try_parse_from(vec!["test", "--today", "2024-02-30"]).is_err());
    }

    #[test]
    fn test_parse_list() {
        let args = vec!["test", "list", "--output-format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::List(cmd) => {
                assert_eq!(cmd.output_format, OutputFormat::Json);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(vec!["test", "show", "12"]).unwrap();
        match cli.command {
            Commands::Show(cmd) => assert_eq!(cmd.id, "12"),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_parse_check() {
        let args = vec!["test", "check", "1990-06-01", "-s", "short"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Check(cmd) => {
                assert_eq!(cmd.dob, "1990-06-01");
                assert_eq!(cmd.style, DateStyle::Short);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[tokio::test]
    async fn test_check_needs_no_config() {
        let cli = Cli::try_parse_from(vec![
            "test",
            "-c",
            "/nonexistent/config.toml",
            "--today",
            "2024-05-28",
            "check",
            "--",
            "--06-01",
        ])
        .unwrap();
        cli.run().await.unwrap();
    }
}
