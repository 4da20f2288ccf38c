//! In-memory record store.
//!
//! Records are kept in insertion order. Duplicates are allowed; nothing
//! about a record is unique.

use crate::record::AttendanceRecord;

/// Ordered collection of attendance records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<AttendanceRecord>,
}

impl RecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn add(&mut self, record: AttendanceRecord) {
        self.records.push(record);
    }

    /// Remove every record whose last name equals `last_name` exactly.
    ///
    /// Returns `true` if at least one record was removed.
    pub fn remove(&mut self, last_name: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.last_name != last_name);
        self.records.len() != before
    }

    /// Records whose last name equals `last_name` exactly, in store order.
    #[must_use]
    pub fn find(&self, last_name: &str) -> Vec<AttendanceRecord> {
        self.records
            .iter()
            .filter(|r| r.last_name == last_name)
            .cloned()
            .collect()
    }

    /// All records, in store order.
    #[must_use]
    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Replace the whole contents, returning the previous records.
    pub fn replace(&mut self, records: Vec<AttendanceRecord>) -> Vec<AttendanceRecord> {
        std::mem::replace(&mut self.records, records)
    }
}

impl From<Vec<AttendanceRecord>> for RecordStore {
    fn from(records: Vec<AttendanceRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<AttendanceRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = AttendanceRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a AttendanceRecord;
    type IntoIter = std::slice::Iter<'a, AttendanceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(last: &str, first: &str, date: &str, attended: bool) -> AttendanceRecord {
        AttendanceRecord::new(last, first, date, "math", attended)
    }

    fn sample_store() -> RecordStore {
        let mut store = RecordStore::new();
        store.add(record("Smith", "Jo", "d1", true));
        store.add(record("Doe", "Al", "d1", true));
        store.add(record("Smith", "Jo", "d2", false));
        store.add(record("smith", "Kim", "d2", true));
        store
    }

    #[test]
    fn test_new_is_empty() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_add_preserves_order() {
        let store = sample_store();
        assert_eq!(store.len(), 4);

        let names: Vec<&str> = store.records().iter().map(|r| r.last_name.as_str()).collect();
        assert_eq!(names, vec!["Smith", "Doe", "Smith", "smith"]);
    }

    #[test]
    fn test_add_allows_duplicates() {
        let mut store = RecordStore::new();
        let r = record("Smith", "Jo", "d1", true);
        store.add(r.clone());
        store.add(r);

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0], store.records()[1]);
    }

    #[test]
    fn test_find_returns_matching_subsequence() {
        let store = sample_store();
        let found = store.find("Smith");

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].date, "d1");
        assert_eq!(found[1].date, "d2");
        assert!(found.iter().all(|r| r.last_name == "Smith"));
    }

    #[test]
    fn test_find_is_case_sensitive_and_exact() {
        let store = sample_store();

        assert_eq!(store.find("smith").len(), 1);
        assert!(store.find("SMITH").is_empty());
        assert!(store.find("Smi").is_empty());
        assert!(store.find("Smith ").is_empty());
    }

    #[test]
    fn test_find_no_match_does_not_mutate() {
        let store = sample_store();
        let before = store.clone();

        assert!(store.find("Nobody").is_empty());
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_all_matching() {
        let mut store = sample_store();

        assert!(store.remove("Smith"));
        assert_eq!(store.len(), 2);
        assert!(store.find("Smith").is_empty());
        assert_eq!(store.find("smith").len(), 1);
    }

    #[test]
    fn test_remove_nonexistent() {
        let mut store = sample_store();
        let before = store.clone();

        assert!(!store.remove("Nobody"));
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_then_find_is_empty() {
        let mut store = sample_store();
        for name in ["Smith", "Doe", "smith", "Nobody"] {
            store.remove(name);
            assert!(store.find(name).is_empty());
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_last_name() {
        let mut store = RecordStore::new();
        store.add(record("", "Jo", "d1", true));
        store.add(record("Doe", "Al", "d1", true));

        assert_eq!(store.find("").len(), 1);
        assert!(store.remove(""));
        assert_eq!(store.len(), 1);
        assert!(!store.remove(""));
    }

    #[test]
    fn test_clear_and_replace() {
        let mut store = sample_store();

        let old = store.replace(vec![record("Doe", "Al", "d3", false)]);
        assert_eq!(old.len(), 4);
        assert_eq!(store.len(), 1);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let store: RecordStore = vec![record("A", "B", "d1", true), record("C", "D", "d1", false)]
            .into_iter()
            .collect();
        assert_eq!(store.len(), 2);
        assert_eq!((&store).into_iter().count(), 2);
    }
}
