//! Core attendance record type for rollbook.
//!
//! A record is one attendance event: one student, one date, one subject.
//! Students have no identifier of their own; they are identified by the
//! last name and first name pair.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Characters the data file format cannot carry inside a field.
const FORBIDDEN_CHARS: &[char] = &[',', '\n', '\r'];

/// Whether the student attended a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The student was present.
    Present,
    /// The student was absent.
    Absent,
}

impl Status {
    /// Parse the words accepted at the shell prompt.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "present" => Some(Self::Present),
            "absent" => Some(Self::Absent),
            _ => None,
        }
    }
}

impl From<bool> for Status {
    fn from(attended: bool) -> Self {
        if attended {
            Self::Present
        } else {
            Self::Absent
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

/// A single attendance event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Student last name.
    pub last_name: String,
    /// Student first name.
    pub first_name: String,
    /// Date of the class, `DD.MM.YYYY` by convention. Not validated.
    pub date: String,
    /// Course or subject label.
    pub subject: String,
    /// `true` when the student was present.
    pub attended: bool,
}

impl AttendanceRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        date: impl Into<String>,
        subject: impl Into<String>,
        attended: bool,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            date: date.into(),
            subject: subject.into(),
            attended,
        }
    }

    /// The aggregation identity: last name, a single space, first name.
    #[must_use]
    pub fn student_key(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// Attendance as a [`Status`].
    #[must_use]
    pub fn status(&self) -> Status {
        Status::from(self.attended)
    }
}

/// Check a single field value against the data file format.
///
/// # Errors
///
/// Returns [`Error::InvalidField`] if the value contains a comma or a line break.
pub fn check_field(field: &'static str, value: &str) -> Result<()> {
    if value.contains(FORBIDDEN_CHARS) {
        return Err(Error::invalid_field(field, value));
    }
    Ok(())
}
