//! Storage layer for rollbook.
//!
//! This module reads and writes the record store to a flat text file using
//! the line format described in [`format`]. The file is opened for the
//! duration of a single save or load and closed on every exit path.

pub mod format;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::record::AttendanceRecord;
use crate::store::RecordStore;

use self::format::LineIssue;

/// Default data file name, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "attendance.txt";

/// Flat file holding the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFile {
    /// Path to the data file.
    path: PathBuf,
}

impl DataFile {
    /// Create a handle for the data file at `path`. Nothing is opened yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the path to the data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write every record in store order, replacing any existing content.
    ///
    /// Returns the number of records written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileOpen`] if the file cannot be created and
    /// [`Error::FileWrite`] if writing to it fails.
    pub fn save(&self, store: &RecordStore) -> Result<usize> {
        let file = File::create(&self.path).map_err(|source| Error::FileOpen {
            path: self.path.clone(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        for record in store {
            writeln!(writer, "{}", format::encode(record)).map_err(|source| {
                Error::FileWrite {
                    path: self.path.clone(),
                    source,
                }
            })?;
        }
        writer.flush().map_err(|source| Error::FileWrite {
            path: self.path.clone(),
            source,
        })?;

        debug!("Saved {} records to {}", store.len(), self.path.display());
        Ok(store.len())
    }

    /// Replace the store contents with the records in the file.
    ///
    /// The store is only touched once the file has been opened and read
    /// in full, so on error it keeps its previous contents. Malformed
    /// lines are logged and loaded with default values.
    ///
    /// Returns the number of records loaded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileOpen`] if the file cannot be opened and
    /// [`Error::Io`] if reading from it fails.
    pub fn load(&self, store: &mut RecordStore) -> Result<usize> {
        let file = File::open(&self.path).map_err(|source| Error::FileOpen {
            path: self.path.clone(),
            source,
        })?;

        let records = read_records(BufReader::new(file))?;
        let count = records.len();
        store.replace(records);

        debug!("Loaded {} records from {}", count, self.path.display());
        Ok(count)
    }
}

impl Default for DataFile {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

/// Decode every line of `reader` into records.
///
/// Lines end at `\n`, with an optional preceding `\r`. Bytes that are not
/// valid UTF-8 are replaced rather than rejected.
///
/// # Errors
///
/// Returns an error if reading from `reader` fails.
pub fn read_records(reader: impl BufRead) -> Result<Vec<AttendanceRecord>> {
    let mut records = Vec::new();
    for (index, line) in reader.split(b'\n').enumerate() {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let (record, issue) = format::decode(&String::from_utf8_lossy(&line));
        match issue {
            Some(LineIssue::MissingFields { found }) => warn!(
                "Line {}: expected {} fields, found {}; missing fields left empty",
                index + 1,
                format::FIELD_COUNT,
                found
            ),
            Some(LineIssue::UnknownFlag) => warn!(
                "Line {}: attendance flag is not 0 or 1; recorded as absent",
                index + 1
            ),
            None => {}
        }
        records.push(record);
    }
    Ok(records)
}
