//! User-facing text.

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const NOT_UNDERSTOOD: &str = "Sorry, I don't understand you. Use the available command.";
pub const NO_CONTACTS: &str = "There are no contacts.";
pub const CONTACTS_FOUND: &str = "Contacts found:";
pub const NOTHING_FOUND: &str = "No contacts were found.";
pub const LOOKUP_FAILED: &str = "There isn't contact with this name or number.";

pub const FORMAT_GUIDANCE: [&str; 4] = [
    "Please enter the correct format of name and phone number.",
    "Correct format:",
    "1. The length of the number must be only 12 digits.",
    "2. Use a gap between name and number.",
];

/// Printed once when an interactive session starts.
pub const BANNER: [&str; 11] = [
    "What can this bot do?",
    "1. Save the contact (name and phone number). Please, remember: number - only 12 digits.",
    "Use command: add [name] [number]",
    "2. Change the phone number of the recorded contact. Please, remember: number - only 12 digits.",
    "Use command: change [name] [old_number] [new_number]",
    "3. Show all previously saved contacts.",
    "Use command: show all",
    "4. Remove the contact.",
    "Use command: remove [name]",
    "5. Find the contact by name or by phone.",
    "Use command: find [name] or [phone]",
];

pub fn added(name: &str) -> String {
    format!("Contact {} has been added.", name)
}

pub fn removed(name: &str) -> String {
    format!("Contact {} has been removed.", name)
}

pub fn no_such_contact(name: &str) -> String {
    format!("There is no contact with name \"{}\".", name)
}

pub fn phone_changed(name: &str, old: &str, new: &str) -> String {
    format!(
        "Phone number for contact {} has been changed from {} to {}.",
        name, old, new
    )
}
