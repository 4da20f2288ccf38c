//! Command-line interface for rollbook.
//!
//! This module provides the CLI structure for the `rollbook` binary.
//! Running it without a subcommand opens the interactive shell.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, FindCommand, StatsCommand};

/// rollbook - Keep track of student attendance
///
/// Records who attended which class on which day, keeps the records in a
/// plain text file, and reports attendance percentages per student.
#[derive(Debug, Parser)]
#[command(name = "rollbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Attendance data file (overrides the configured one)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to the interactive shell)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive menu
    Shell,

    /// Print the records for a last name
    Find(FindCommand),

    /// Print attendance percentages per student
    Stats(StatsCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }

    /// Take the command to run, with the interactive shell as the default.
    pub fn take_command(&mut self) -> Command {
        self.command.take().unwrap_or(Command::Shell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli_with(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            file: None,
            verbose,
            quiet,
            command: None,
        }
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "rollbook");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        use crate::logging::Verbosity;

        assert_eq!(cli_with(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(3, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli_with(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli_with(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_no_arguments_opens_shell() {
        let mut cli = Cli::try_parse_from(vec!["rollbook"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.take_command(), Command::Shell));
    }

    #[test]
    fn test_parse_find() {
        let mut cli = Cli::try_parse_from(vec!["rollbook", "find", "Smith", "--json"]).unwrap();
        match cli.take_command() {
            Command::Find(cmd) => {
                assert_eq!(cmd.last_name, "Smith");
                assert!(cmd.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_stats() {
        let cli = Cli::try_parse_from(vec!["rollbook", "stats"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Stats(StatsCommand { json: false }))
        ));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli =
            Cli::try_parse_from(vec!["rollbook", "config", "validate", "--path", "c.toml"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigCommand::Validate { path: Some(_) }))
        ));
    }

    #[test]
    fn test_parse_global_flags() {
        let args = vec![
            "rollbook",
            "-c",
            "/custom/config.toml",
            "-f",
            "roll.txt",
            "-v",
            "stats",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(cli.file, Some(PathBuf::from("roll.txt")));
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_parse_with_quiet() {
        let cli = Cli::try_parse_from(vec!["rollbook", "-q"]).unwrap();
        assert!(cli.quiet);
    }
}
