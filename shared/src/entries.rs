use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::constants::DEFAULT_NAMES;
use crate::validation::{entry_key, validate_entry, validate_unique};

static BULK_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n,]+").unwrap());

/// Ordered participant names, unique under case-insensitive comparison.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EntryList {
    entries: Vec<String>,
}

impl Default for EntryList {
    fn default() -> Self {
        Self::with_seed(DEFAULT_NAMES)
    }
}

impl EntryList {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Builds a list from seed names, applying the same trimming and
    /// de-duplication rules as a bulk import.
    pub fn with_seed<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for name in seed {
            let _ = list.add_single(name.as_ref());
        }
        list
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        validate_unique(name, &self.entries).is_err()
    }

    /// Appends one name. Empty input and case-insensitive duplicates are
    /// rejected and leave the list untouched.
    pub fn add_single(&mut self, raw: &str) -> Result<(), ValidationError> {
        let name = validate_entry(raw)?;
        validate_unique(name, &self.entries)?;
        self.entries.push(name.to_string());
        Ok(())
    }

    /// Splits `raw` on newlines and commas and appends every new name in
    /// order. Returns how many names were added.
    pub fn add_bulk(&mut self, raw: &str) -> usize {
        let mut seen: HashSet<String> = self.entries.iter().map(|e| entry_key(e)).collect();
        let before = self.entries.len();

        for piece in BULK_SEPARATOR.split(raw) {
            let Ok(name) = validate_entry(piece) else {
                continue;
            };
            if seen.insert(entry_key(name)) {
                self.entries.push(name.to_string());
            }
        }

        self.entries.len() - before
    }

    /// Removes the entry exactly equal to `value`.
    pub fn remove(&mut self, value: &str) -> bool {
        match self.entries.iter().position(|entry| entry == value) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DUPLICATE_ENTRY_CODE, EMPTY_ENTRY_CODE};

    fn names(list: &EntryList) -> Vec<&str> {
        list.iter().collect()
    }

    fn assert_unique(list: &EntryList) {
        let keys: HashSet<String> = list.iter().map(entry_key).collect();
        assert_eq!(keys.len(), list.len());
    }

    #[test]
    fn test_default_seed() {
        let list = EntryList::default();
        assert_eq!(names(&list), vec!["Alice", "Brandon", "Charlotte", "Dylan"]);
    }

    #[test]
    fn test_add_single_appends_trimmed() {
        let mut list = EntryList::new();
        list.add_single("  Taylor  ").unwrap();
        list.add_single("Morgan").unwrap();
        assert_eq!(names(&list), vec!["Taylor", "Morgan"]);
    }

    #[test]
    fn test_add_single_rejects_empty() {
        let mut list = EntryList::default();
        let error = list.add_single("   ").unwrap_err();
        assert_eq!(error.code, EMPTY_ENTRY_CODE);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_add_single_duplicate_any_case_is_noop() {
        let mut list = EntryList::default();
        let before = list.clone();
        for attempt in ["alice", "ALICE", " Alice ", "aLiCe"] {
            let error = list.add_single(attempt).unwrap_err();
            assert_eq!(error.code, DUPLICATE_ENTRY_CODE);
        }
        assert_eq!(list, before);
    }

    #[test]
    fn test_add_bulk_example() {
        let mut list = EntryList::new();
        let added = list.add_bulk("Taylor\nMorgan\ntaylor\nKai");
        assert_eq!(added, 3);
        assert_eq!(names(&list), vec!["Taylor", "Morgan", "Kai"]);
    }

    #[test]
    fn test_add_bulk_mixed_separators() {
        let mut list = EntryList::new();
        let added = list.add_bulk(" Ana , Bo,,\r\n\n Cy ,\n , ");
        assert_eq!(added, 3);
        assert_eq!(names(&list), vec!["Ana", "Bo", "Cy"]);
    }

    #[test]
    fn test_add_bulk_skips_existing() {
        let mut list = EntryList::default();
        let added = list.add_bulk("dylan, Erin, BRANDON, erin");
        assert_eq!(added, 1);
        assert_eq!(names(&list), vec!["Alice", "Brandon", "Charlotte", "Dylan", "Erin"]);
        assert_unique(&list);
    }

    #[test]
    fn test_add_bulk_nothing_new() {
        let mut list = EntryList::default();
        assert_eq!(list.add_bulk("alice\n, \n"), 0);
        assert_eq!(list.add_bulk(""), 0);
        assert_eq!(list, EntryList::default());
    }

    #[test]
    fn test_remove_present_keeps_order() {
        let mut list = EntryList::default();
        assert!(list.remove("Brandon"));
        assert_eq!(names(&list), vec!["Alice", "Charlotte", "Dylan"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut list = EntryList::default();
        assert!(!list.remove("Zed"));
        // Exact match only.
        assert!(!list.remove("alice"));
        assert_eq!(list, EntryList::default());
    }

    #[test]
    fn test_seed_deduplicates() {
        let list = EntryList::with_seed(["Kai", "kai", " ", "Lee"]);
        assert_eq!(names(&list), vec!["Kai", "Lee"]);
    }

    #[test]
    fn test_mixed_operations_stay_unique() {
        let mut list = EntryList::new();
        list.add_bulk("a,b,c,A,B");
        let _ = list.add_single("C");
        let _ = list.add_single("d");
        list.remove("b");
        list.add_bulk("B\nD\ne");
        assert_unique(&list);
        assert_eq!(names(&list), vec!["a", "c", "d", "B", "e"]);
    }
}
