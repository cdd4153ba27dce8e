//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the two contact fields:
//! names and phone numbers. These value objects validate at construction
//! time so an invalid field can never be stored in a record.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;
