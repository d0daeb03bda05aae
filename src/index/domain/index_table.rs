use super::PackageRecord;
use std::collections::HashMap;

/// Merged package index mapping each package name to its parsed record.
///
/// Sources are merged sequentially; a record loaded later replaces an
/// earlier record with the same name (last source wins).
#[derive(Debug, Clone, Default)]
pub struct IndexTable {
    records: HashMap<String, PackageRecord>,
}

impl IndexTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any existing record with the same name.
    pub fn insert(&mut self, record: PackageRecord) {
        self.records.insert(record.name().to_string(), record);
    }

    /// Merges `other` into `self`. Entries from `other` win on name
    /// conflicts.
    pub fn merge(&mut self, other: IndexTable) {
        self.records.extend(other.records);
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut table = IndexTable::new();
        table.insert(PackageRecord::new("curl", vec!["libcurl".to_string()]));

        assert!(table.contains("curl"));
        assert!(!table.contains("libcurl"));
        assert_eq!(table.get("curl").unwrap().depends(), ["libcurl"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut table = IndexTable::new();
        table.insert(PackageRecord::new("foo", vec!["bar".to_string()]));
        table.insert(PackageRecord::new("foo", vec!["baz".to_string()]));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("foo").unwrap().depends(), ["baz"]);
    }

    #[test]
    fn test_merge_last_source_wins() {
        let mut first = IndexTable::new();
        first.insert(PackageRecord::new("foo", vec!["bar".to_string()]));
        first.insert(PackageRecord::new("only-first", vec![]));

        let mut second = IndexTable::new();
        second.insert(PackageRecord::new("foo", vec!["baz".to_string()]));
        second.insert(PackageRecord::new("only-second", vec![]));

        first.merge(second);

        assert_eq!(first.len(), 3);
        assert_eq!(first.get("foo").unwrap().depends(), ["baz"]);
        assert!(first.contains("only-first"));
        assert!(first.contains("only-second"));
    }

    #[test]
    fn test_empty_table() {
        let table = IndexTable::new();
        assert!(table.is_empty());
        assert!(table.get("anything").is_none());
    }
}
