//! `rollbook` - CLI for the attendance tracker
//!
//! With no arguments this opens the interactive menu. Subcommands give
//! one-shot access to searches, statistics and configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

use rollbook::cli::{Cli, Command, ConfigCommand, FindCommand, StatsCommand};
use rollbook::{init_logging, report, AttendanceSystem, Config, Shell};

fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();

    init_logging(cli.verbosity());

    let mut config = Config::load_from(cli.config.clone()).context("loading configuration")?;
    if let Some(file) = cli.file.take() {
        config.storage.data_file = file;
    }

    match cli.take_command() {
        Command::Shell => handle_shell(&config),
        Command::Find(find_cmd) => handle_find(&config, &find_cmd),
        Command::Stats(stats_cmd) => handle_stats(&config, &stats_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_shell(config: &Config) -> anyhow::Result<()> {
    let system = AttendanceSystem::from_config(config);
    let stdin = io::stdin();
    let mut shell = Shell::new(system, stdin.lock(), io::stdout(), config.shell.clone());
    shell.run()?;
    Ok(())
}

/// Load the configured data file for a one-shot command.
fn load_system(config: &Config) -> anyhow::Result<AttendanceSystem> {
    let mut system = AttendanceSystem::from_config(config);
    system
        .load_from_file()
        .with_context(|| format!("loading {}", system.data_path().display()))?;
    Ok(system)
}

fn handle_find(config: &Config, cmd: &FindCommand) -> anyhow::Result<()> {
    let system = load_system(config)?;
    let found = system.find_records(&cmd.last_name);
    let mut out = io::stdout().lock();

    if cmd.json {
        report::write_json(&mut out, &found)?;
    } else if found.is_empty() {
        writeln!(out, "No records found.")?;
    } else {
        report::write_records(&mut out, &found)?;
    }
    Ok(())
}

fn handle_stats(config: &Config, cmd: &StatsCommand) -> anyhow::Result<()> {
    let system = load_system(config)?;
    let mut out = io::stdout().lock();

    if cmd.json {
        let stats: serde_json::Map<String, serde_json::Value> = system
            .student_stats()
            .into_iter()
            .map(|(student, s)| {
                let entry = serde_json::json!({
                    "present": s.present,
                    "total": s.total,
                    "percentage": s.percentage(),
                });
                (student, entry)
            })
            .collect();
        report::write_json(&mut out, &stats)?;
    } else {
        report::write_percentages(
            &mut out,
            &system.attendance_percentages(),
            config.shell.percent_precision,
        )?;
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                report::write_json(&mut io::stdout().lock(), config)?;
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Data file:          {}", config.data_file().display());
                println!();
                println!("[Shell]");
                println!("  Load on startup:    {}", config.shell.load_on_startup);
                println!("  Percent precision:  {}", config.shell.percent_precision);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { path } => {
            let path = path.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path)).context("configuration error")?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validate_fails_on_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[shell]\npercent_precision = 99\n").unwrap();

        let result = handle_config(
            &Config::default(),
            ConfigCommand::Validate { path: Some(path) },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validate_accepts_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\ndata_file = \"roll.txt\"\n").unwrap();

        let result = handle_config(
            &Config::default(),
            ConfigCommand::Validate { path: Some(path) },
        );
        assert!(result.is_ok());
    }
}
