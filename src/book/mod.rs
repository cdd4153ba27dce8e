//! In-memory contact directory.
//!
//! The address book is the only state the application keeps. It lives for
//! the whole session and is never persisted.

mod address_book;

pub use address_book::{AddressBook, PhoneChange};
