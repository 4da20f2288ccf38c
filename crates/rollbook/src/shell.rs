//! Interactive menu.
//!
//! The shell reads commands from any [`BufRead`] and writes prompts and
//! tables to any [`Write`], so a session can be scripted in tests exactly
//! as a user would type it.

use std::io::{BufRead, Write};

use chrono::Local;
use tracing::debug;

use crate::config::ShellConfig;
use crate::error::Result;
use crate::record::{self, AttendanceRecord, Status};
use crate::report;
use crate::system::AttendanceSystem;

const MENU: &str = "\n=== Student Attendance System ===\n\
1. Add attendance record\n\
2. Delete records by last name\n\
3. Find records by last name\n\
4. Show attendance percentage\n\
5. Save data\n\
6. Load data\n\
0. Exit\n\
Choose an option: ";

/// Date format used at the prompt and for the default date.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add one attendance record.
    Add,
    /// Delete all records for a last name.
    Delete,
    /// Find all records for a last name.
    Find,
    /// Show attendance percentages.
    Percentages,
    /// Save to the data file.
    Save,
    /// Load from the data file.
    Load,
    /// Leave the shell.
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(Self::Add),
            2 => Some(Self::Delete),
            3 => Some(Self::Find),
            4 => Some(Self::Percentages),
            5 => Some(Self::Save),
            6 => Some(Self::Load),
            0 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Interactive session over an attendance system.
#[derive(Debug)]
pub struct Shell<R, W> {
    system: AttendanceSystem,
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell around `system`.
    pub fn new(system: AttendanceSystem, input: R, output: W, config: ShellConfig) -> Self {
        Self {
            system,
            input,
            output,
            config,
        }
    }

    /// Run the menu loop until the user exits or the input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading the input or writing the output
    /// fails. Data file problems are reported to the user instead.
    pub fn run(&mut self) -> Result<()> {
        if self.config.load_on_startup {
            match self.system.load_from_file() {
                Ok(_) => self.say("Data loaded successfully.")?,
                Err(e) => {
                    debug!("Startup load failed: {}", e);
                    self.say("Failed to load data or file does not exist.")?;
                }
            }
        }

        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                self.say("Exiting the program.")?;
                return Ok(());
            };

            let finished = match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => {
                    self.say("Exiting the program.")?;
                    return Ok(());
                }
                Some(choice) => self.dispatch(choice)?,
                None => {
                    self.say("Invalid choice. Try again.")?;
                    false
                }
            };
            if finished {
                self.say("Exiting the program.")?;
                return Ok(());
            }
        }
    }

    /// The system behind this shell.
    #[must_use]
    pub fn system(&self) -> &AttendanceSystem {
        &self.system
    }

    /// Consume the shell, returning the system and the output sink.
    pub fn into_parts(self) -> (AttendanceSystem, W) {
        (self.system, self.output)
    }

    /// Run one menu action. Returns `true` if the input ran out mid-action.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<bool> {
        match choice {
            MenuChoice::Add => {
                let Some(record) = self.prompt_record()? else {
                    return Ok(true);
                };
                self.system.add_record(record);
                self.say("Record added.")?;
            }
            MenuChoice::Delete => {
                let Some(last_name) = self.prompt("Enter last name to delete records: ")? else {
                    return Ok(true);
                };
                if self.system.remove_records(&last_name) {
                    self.say("Records deleted.")?;
                } else {
                    self.say("No records found with this last name.")?;
                }
            }
            MenuChoice::Find => {
                let Some(last_name) = self.prompt("Enter last name to search: ")? else {
                    return Ok(true);
                };
                let found = self.system.find_records(&last_name);
                if found.is_empty() {
                    self.say("No records found.")?;
                } else {
                    report::write_records(&mut self.output, &found)?;
                }
            }
            MenuChoice::Percentages => {
                let percentages = self.system.attendance_percentages();
                report::write_percentages(
                    &mut self.output,
                    &percentages,
                    self.config.percent_precision,
                )?;
            }
            MenuChoice::Save => match self.system.save_to_file() {
                Ok(_) => self.say("Data saved successfully.")?,
                Err(_) => self.say("Error saving data.")?,
            },
            MenuChoice::Load => match self.system.load_from_file() {
                Ok(_) => self.say("Data loaded successfully.")?,
                Err(e) => {
                    debug!("Load failed: {}", e);
                    self.say("Error loading data.")?;
                }
            },
            MenuChoice::Exit => return Ok(true),
        }
        Ok(false)
    }

    /// Ask for every field of a record. `None` if the input ends first.
    fn prompt_record(&mut self) -> Result<Option<AttendanceRecord>> {
        let Some(last_name) = self.prompt_field("last_name", "Enter last name: ")? else {
            return Ok(None);
        };
        let Some(first_name) = self.prompt_field("first_name", "Enter first name: ")? else {
            return Ok(None);
        };
        let Some(mut date) = self.prompt_field("date", "Enter date (DD.MM.YYYY): ")? else {
            return Ok(None);
        };
        if date.is_empty() {
            date = Local::now().format(DATE_FORMAT).to_string();
        }
        let Some(subject) = self.prompt_field("subject", "Enter subject: ")? else {
            return Ok(None);
        };
        let Some(status) = self.prompt_status()? else {
            return Ok(None);
        };

        Ok(Some(AttendanceRecord::new(
            last_name,
            first_name,
            date,
            subject,
            status == Status::Present,
        )))
    }

    /// Ask until the value can be stored in the data file.
    fn prompt_field(&mut self, field: &'static str, prompt: &str) -> Result<Option<String>> {
        loop {
            let Some(value) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match record::check_field(field, &value) {
                Ok(()) => return Ok(Some(value)),
                Err(_) => self.say("Error! Commas and line breaks are not allowed.")?,
            }
        }
    }

    fn prompt_status(&mut self) -> Result<Option<Status>> {
        loop {
            let Some(word) = self.prompt("Status (present/absent): ")? else {
                return Ok(None);
            };
            if let Some(status) = Status::from_word(&word) {
                return Ok(Some(status));
            }
            self.say("Error! Enter 'present' or 'absent'.")?;
        }
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}
