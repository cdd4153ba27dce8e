//! Name-keyed contact store with a case-insensitive secondary index.

use crate::domain::PhoneNumber;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use std::collections::HashMap;
use tracing::{info, warn};

/// Outcome of [`AddressBook::change_phone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneChange {
    /// The old number was found and replaced.
    Changed { old: PhoneNumber, new: PhoneNumber },

    /// The old number is not on the record; nothing was modified.
    Unchanged,
}

/// Contacts keyed by their exact name.
///
/// Keys are case-sensitive. A second index keyed by the lowercased name
/// backs [`find_by_name`](Self::find_by_name), so case-insensitive lookup
/// never needs to scan every record. Iteration follows insertion order.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
    folded: HashMap<String, Vec<String>>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Exact-key lookup.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-key lookup for in-place edits.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Insert a record under its name.
    ///
    /// An existing record with the same exact name is replaced wholesale
    /// (phone lists are not merged) and returned. The replaced key keeps its
    /// original position in iteration order.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let folded = record.name().folded();

        if let Some(previous) = self.records.insert(key.clone(), record) {
            warn!(
                name = %key,
                dropped_phones = previous.phones().len(),
                "Contact overwritten"
            );
            return Some(previous);
        }

        self.folded
            .entry(folded)
            .or_default()
            .push(key.clone());
        info!(name = %key, "Contact added");
        self.order.push(key);
        None
    }

    /// Remove the record stored under exactly `name`.
    ///
    /// Returns `false` when no such record exists.
    pub fn remove_record(&mut self, name: &str) -> bool {
        if self.records.remove(name).is_none() {
            return false;
        }

        self.order.retain(|key| key != name);

        let folded = name.to_lowercase();
        if let Some(keys) = self.folded.get_mut(&folded) {
            keys.retain(|key| key != name);
            if keys.is_empty() {
                self.folded.remove(&folded);
            }
        }

        info!(name = %name, "Contact removed");
        true
    }

    /// Records whose name equals `query` ignoring case.
    pub fn find_by_name(&self, query: &str) -> Vec<&Record> {
        self.folded
            .get(&query.to_lowercase())
            .map(|keys| keys.iter().filter_map(|key| self.records.get(key)).collect())
            .unwrap_or_default()
    }

    /// Records holding at least one phone exactly equal to `query`.
    pub fn find_by_phone(&self, query: &str) -> Vec<&Record> {
        self.records()
            .filter(|record| record.has_phone(query))
            .collect()
    }

    /// Replace `old` with `new` on the record named exactly `name`.
    ///
    /// # Errors
    ///
    /// - `CommandError::NotFound` if there is no such contact.
    /// - `CommandError::InvalidPhone` if either number is malformed.
    pub fn change_phone(
        &mut self,
        name: &str,
        old: &str,
        new: &str,
    ) -> CommandResult<PhoneChange> {
        let record = self
            .records
            .get_mut(name)
            .ok_or_else(|| CommandError::NotFound {
                name: name.to_string(),
            })?;

        let old = PhoneNumber::new(old)?;
        let new = PhoneNumber::new(new)?;

        if record.edit_phone(&old, new.clone()) {
            info!(name = %name, old = %old, new = %new, "Phone changed");
            Ok(PhoneChange::Changed { old, new })
        } else {
            Ok(PhoneChange::Unchanged)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Name;

    fn record(name: &str, phone: &str) -> Record {
        Record::new(Name::new(name).unwrap(), PhoneNumber::new(phone).unwrap())
    }

    fn names(records: &[&Record]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.name().as_str().to_string())
            .collect()
    }

    #[test]
    fn test_new_book_is_empty() {
        let book = AddressBook::new();
        assert!(book.is_empty());
        assert_eq!(book.records().count(), 0);
    }

    #[test]
    fn test_add_and_get() {
        let mut book = AddressBook::new();
        assert!(book.add_record(record("Mike", "123456789012")).is_none());

        let stored = book.get("Mike").unwrap();
        assert_eq!(stored.phones()[0].as_str(), "123456789012");
        assert!(book.get("mike").is_none());
    }

    #[test]
    fn test_add_overwrites_without_merging() {
        let mut book = AddressBook::new();
        book.add_record(record("Mike", "111111111111"));
        book.add_record(record("Anna", "222222222222"));

        let previous = book.add_record(record("Mike", "333333333333")).unwrap();
        assert_eq!(previous.phones()[0].as_str(), "111111111111");

        assert_eq!(book.len(), 2);
        let mike = book.get("Mike").unwrap();
        assert_eq!(mike.phones().len(), 1);
        assert_eq!(mike.phones()[0].as_str(), "333333333333");

        // Overwritten key keeps its slot.
        let order: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(order, vec!["Mike", "Anna"]);
        assert_eq!(book.find_by_name("MIKE").len(), 1);
    }

    #[test]
    fn test_records_keep_insertion_order() {
        let mut book = AddressBook::new();
        for name in ["Zed", "Anna", "Mike"] {
            book.add_record(record(name, "123456789012"));
        }
        let order: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(order, vec!["Zed", "Anna", "Mike"]);
    }

    #[test]
    fn test_remove_record() {
        let mut book = AddressBook::new();
        book.add_record(record("Mike", "123456789012"));

        assert!(book.remove_record("Mike"));
        assert!(book.is_empty());
        assert!(book.find_by_name("mike").is_empty());
        assert_eq!(book.records().count(), 0);
    }

    #[test]
    fn test_remove_missing_record_leaves_book_unchanged() {
        let mut book = AddressBook::new();
        book.add_record(record("Mike", "123456789012"));

        assert!(!book.remove_record("Nobody"));
        assert!(!book.remove_record("mike"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let mut book = AddressBook::new();
        book.add_record(record("Mike", "123456789012"));

        for query in ["Mike", "mike", "MIKE", "mIkE"] {
            assert_eq!(names(&book.find_by_name(query)), vec!["Mike"]);
        }
        assert!(book.find_by_name("Mik").is_empty());
    }

    #[test]
    fn test_find_by_name_returns_every_case_variant() {
        let mut book = AddressBook::new();
        book.add_record(record("Mike", "111111111111"));
        book.add_record(record("MIKE", "222222222222"));
        book.add_record(record("Anna", "333333333333"));

        assert_eq!(names(&book.find_by_name("mike")), vec!["Mike", "MIKE"]);

        book.remove_record("Mike");
        assert_eq!(names(&book.find_by_name("mike")), vec!["MIKE"]);
    }

    #[test]
    fn test_find_by_phone() {
        let mut book = AddressBook::new();
        book.add_record(record("Mike", "111111111111"));
        book.add_record(record("Anna", "222222222222"));
        book.get_mut("Anna")
            .unwrap()
            .add_phone(PhoneNumber::new("111111111111").unwrap());

        assert_eq!(
            names(&book.find_by_phone("111111111111")),
            vec!["Mike", "Anna"]
        );
        assert!(book.find_by_phone("11111111111").is_empty());
    }

    #[test]
    fn test_find_by_phone_lists_record_once() {
        let mut book = AddressBook::new();
        book.add_record(record("Mike", "111111111111"));
        book.get_mut("Mike")
            .unwrap()
            .add_phone(PhoneNumber::new("111111111111").unwrap());

        assert_eq!(book.find_by_phone("111111111111").len(), 1);
    }

    #[test]
    fn test_change_phone() {
        let mut book = AddressBook::new();
        book.add_record(record("Mike", "123456789012"));

        let change = book
            .change_phone("Mike", "123456789012", "999999999999")
            .unwrap();
        assert_eq!(
            change,
            PhoneChange::Changed {
                old: PhoneNumber::new("123456789012").unwrap(),
                new: PhoneNumber::new("999999999999").unwrap(),
            }
        );
        assert!(book.get("Mike").unwrap().has_phone("999999999999"));
        assert!(!book.get("Mike").unwrap().has_phone("123456789012"));
    }

    #[test]
    fn test_change_phone_absent_old_is_silent() {
        let mut book = AddressBook::new();
        book.add_record(record("Mike", "123456789012"));

        let change = book
            .change_phone("Mike", "000000000000", "999999999999")
            .unwrap();
        assert_eq!(change, PhoneChange::Unchanged);
        assert_eq!(book.get("Mike").unwrap().phones()[0].as_str(), "123456789012");
    }

    #[test]
    fn test_change_phone_missing_contact() {
        let mut book = AddressBook::new();
        let err = book
            .change_phone("Nobody", "123456789012", "999999999999")
            .unwrap_err();
        assert_eq!(
            err,
            CommandError::NotFound {
                name: "Nobody".to_string()
            }
        );
    }

    #[test]
    fn test_change_phone_invalid_number() {
        let mut book = AddressBook::new();
        book.add_record(record("Mike", "123456789012"));

        let err = book.change_phone("Mike", "123456789012", "999").unwrap_err();
        assert!(matches!(err, CommandError::InvalidPhone(_)));
        assert!(book.get("Mike").unwrap().has_phone("123456789012"));
    }
}
