//! Per-student attendance statistics.
//!
//! Students are keyed by `"<last_name> <first_name>"` with no case folding,
//! and results are ordered lexicographically by that key.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::store::RecordStore;

/// Attendance counts for one student.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StudentStats {
    /// Classes the student attended.
    pub present: usize,
    /// Classes recorded for the student.
    pub total: usize,
}

impl StudentStats {
    /// Attendance as a percentage in `0.0..=100.0`.
    ///
    /// Returns `0.0` when no classes are recorded.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.present as f64 / self.total as f64 * 100.0
        }
    }
}

/// Count present and total classes for every student in the store.
#[must_use]
pub fn student_stats(store: &RecordStore) -> BTreeMap<String, StudentStats> {
    let mut stats: BTreeMap<String, StudentStats> = BTreeMap::new();
    for record in store {
        let entry = stats.entry(record.student_key()).or_default();
        entry.total += 1;
        if record.attended {
            entry.present += 1;
        }
    }
    stats
}

/// Attendance percentage for every student in the store.
#[must_use]
pub fn attendance_percentages(store: &RecordStore) -> BTreeMap<String, f64> {
    student_stats(store)
        .into_iter()
        .map(|(key, stats)| (key, stats.percentage()))
        .collect()
}
