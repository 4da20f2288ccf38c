//! The attendance system: one record store bound to one data file.
//!
//! This is the surface the interactive shell and the CLI talk to. Each
//! instance owns its own store, so independent systems never share state.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::record::AttendanceRecord;
use crate::stats::{self, StudentStats};
use crate::storage::DataFile;
use crate::store::RecordStore;

/// Attendance records plus the file they are saved to.
#[derive(Debug, Clone, Default)]
pub struct AttendanceSystem {
    store: RecordStore,
    data_file: DataFile,
}

impl AttendanceSystem {
    /// Create an empty system backed by the data file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            store: RecordStore::new(),
            data_file: DataFile::new(path),
        }
    }

    /// Create an empty system backed by the configured data file.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.data_file())
    }

    /// Append a record.
    pub fn add_record(&mut self, record: AttendanceRecord) {
        self.store.add(record);
    }

    /// Remove every record for the exact last name. Returns `true` if any were removed.
    pub fn remove_records(&mut self, last_name: &str) -> bool {
        let removed = self.store.remove(last_name);
        if removed {
            info!("Removed records for last name {:?}", last_name);
        }
        removed
    }

    /// Records for the exact last name, in insertion order.
    #[must_use]
    pub fn find_records(&self, last_name: &str) -> Vec<AttendanceRecord> {
        self.store.find(last_name)
    }

    /// Attendance percentage per student, ordered by student key.
    #[must_use]
    pub fn attendance_percentages(&self) -> BTreeMap<String, f64> {
        stats::attendance_percentages(&self.store)
    }

    /// Present and total counts per student, ordered by student key.
    #[must_use]
    pub fn student_stats(&self) -> BTreeMap<String, StudentStats> {
        stats::student_stats(&self.store)
    }

    /// Save all records to the data file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file cannot be opened or written.
    pub fn save_to_file(&self) -> Result<usize> {
        let result = self.data_file.save(&self.store);
        if let Err(e) = &result {
            warn!("Save failed: {}", e);
        }
        result
    }

    /// Replace all records with the contents of the data file.
    ///
    /// On error the current records are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file cannot be opened or read.
    pub fn load_from_file(&mut self) -> Result<usize> {
        self.data_file.load(&mut self.store)
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Path of the data file.
    #[must_use]
    pub fn data_path(&self) -> &Path {
        self.data_file.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_test_logging;

    fn system_in(dir: &tempfile::TempDir) -> AttendanceSystem {
        AttendanceSystem::new(dir.path().join("attendance.txt"))
    }

    fn add_sample(system: &mut AttendanceSystem) {
        system.add_record(AttendanceRecord::new("Smith", "Jo", "d1", "math", true));
        system.add_record(AttendanceRecord::new("Smith", "Jo", "d2", "math", false));
        system.add_record(AttendanceRecord::new("Doe", "Al", "d1", "sci", true));
    }

    #[test]
    fn test_default_uses_attendance_txt() {
        let system = AttendanceSystem::default();
        assert_eq!(system.data_path(), Path::new("attendance.txt"));
        assert!(system.store().is_empty());
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.storage.data_file = "/tmp/roll.txt".into();

        let system = AttendanceSystem::from_config(&config);
        assert_eq!(system.data_path(), Path::new("/tmp/roll.txt"));
    }

    #[test]
    fn test_add_find_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut system = system_in(&dir);
        add_sample(&mut system);

        assert_eq!(system.find_records("Smith").len(), 2);
        assert!(system.remove_records("Smith"));
        assert!(system.find_records("Smith").is_empty());
        assert!(!system.remove_records("Smith"));
        assert_eq!(system.store().len(), 1);
    }

    #[test]
    fn test_attendance_percentages() {
        let dir = tempfile::tempdir().unwrap();
        let mut system = system_in(&dir);
        add_sample(&mut system);

        let percentages: Vec<(String, f64)> = system.attendance_percentages().into_iter().collect();
        assert_eq!(
            percentages,
            vec![("Doe Al".to_string(), 100.0), ("Smith Jo".to_string(), 50.0)]
        );
        assert_eq!(system.student_stats()["Smith Jo"].total, 2);
    }

    #[test]
    fn test_save_then_load() {
        init_test_logging();
        let dir = tempfile::tempdir().unwrap();
        let mut system = system_in(&dir);
        add_sample(&mut system);

        assert_eq!(system.save_to_file().unwrap(), 3);

        let mut reloaded = system_in(&dir);
        assert_eq!(reloaded.load_from_file().unwrap(), 3);
        assert_eq!(reloaded.store(), system.store());
    }

    #[test]
    fn test_load_missing_file_keeps_records() {
        init_test_logging();
        let dir = tempfile::tempdir().unwrap();
        let mut system = system_in(&dir);
        add_sample(&mut system);

        assert!(system.load_from_file().is_err());
        assert_eq!(system.store().len(), 3);
    }

    #[test]
    fn test_independent_systems_do_not_share_records() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = system_in(&dir);
        let second = system_in(&dir);

        add_sample(&mut first);
        assert!(second.store().is_empty());
    }
}
