//! Record model representing one contact in the address book.

use crate::domain::{Name, PhoneNumber};
use serde::{Deserialize, Serialize};

/// A contact: a name plus an ordered list of phone numbers.
///
/// The name is fixed once the record is created. Phone numbers keep their
/// insertion order and may repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a record holding exactly one phone number.
    pub fn new(name: Name, phone: PhoneNumber) -> Self {
        Self {
            name,
            phones: vec![phone],
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Whether any phone on this record equals `value` exactly.
    pub fn has_phone(&self, value: &str) -> bool {
        self.phones.iter().any(|p| p.as_str() == value)
    }

    /// Append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// Returns `false` (and leaves the record untouched) when it is absent.
    pub fn remove_phone(&mut self, phone: &PhoneNumber) -> bool {
        match self.phones.iter().position(|p| p == phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first occurrence of `old` with `new`, keeping its position.
    ///
    /// Returns whether a replacement happened.
    pub fn edit_phone(&mut self, old: &PhoneNumber, new: PhoneNumber) -> bool {
        match self.phones.iter_mut().find(|p| **p == *old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    /// One `"<name> - <phone>"` line per phone number.
    pub fn display_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.phones
            .iter()
            .map(move |phone| format!("{} - {}", self.name, phone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(value: &str) -> PhoneNumber {
        PhoneNumber::new(value).unwrap()
    }

    fn record() -> Record {
        Record::new(Name::new("Mike").unwrap(), phone("123456789012"))
    }

    #[test]
    fn test_new_record_has_one_phone() {
        let record = record();
        assert_eq!(record.name().as_str(), "Mike");
        assert_eq!(record.phones(), &[phone("123456789012")]);
    }

    #[test]
    fn test_add_phone_appends_duplicates() {
        let mut record = record();
        record.add_phone(phone("222222222222"));
        record.add_phone(phone("123456789012"));
        assert_eq!(
            record.phones(),
            &[
                phone("123456789012"),
                phone("222222222222"),
                phone("123456789012")
            ]
        );
    }

    #[test]
    fn test_remove_phone_removes_first_match_only() {
        let mut record = record();
        record.add_phone(phone("222222222222"));
        record.add_phone(phone("123456789012"));

        assert!(record.remove_phone(&phone("123456789012")));
        assert_eq!(
            record.phones(),
            &[phone("222222222222"), phone("123456789012")]
        );
    }

    #[test]
    fn test_remove_phone_absent_is_noop() {
        let mut record = record();
        assert!(!record.remove_phone(&phone("999999999999")));
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_keeps_position() {
        let mut record = record();
        record.add_phone(phone("222222222222"));
        record.add_phone(phone("333333333333"));

        assert!(record.edit_phone(&phone("222222222222"), phone("444444444444")));
        assert_eq!(
            record.phones(),
            &[
                phone("123456789012"),
                phone("444444444444"),
                phone("333333333333")
            ]
        );
    }

    #[test]
    fn test_edit_phone_replaces_only_first_occurrence() {
        let mut record = record();
        record.add_phone(phone("123456789012"));

        assert!(record.edit_phone(&phone("123456789012"), phone("999999999999")));
        assert_eq!(
            record.phones(),
            &[phone("999999999999"), phone("123456789012")]
        );
    }

    #[test]
    fn test_edit_phone_absent_leaves_phones_identical() {
        let mut record = record();
        record.add_phone(phone("222222222222"));
        let before = record.clone();

        assert!(!record.edit_phone(&phone("999999999999"), phone("000000000000")));
        assert_eq!(record, before);
    }

    #[test]
    fn test_display_lines() {
        let mut record = record();
        record.add_phone(phone("222222222222"));
        let lines: Vec<String> = record.display_lines().collect();
        assert_eq!(lines, vec!["Mike - 123456789012", "Mike - 222222222222"]);
    }

    #[test]
    fn test_record_serialization() {
        let json = serde_json::to_string(&record()).unwrap();
        assert_eq!(json, r#"{"name":"Mike","phones":["123456789012"]}"#);
    }
}
