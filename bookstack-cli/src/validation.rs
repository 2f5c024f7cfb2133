//! Input validation rules for registration and member-detail prompts.
//!
//! Deliberately shallow checks, matching the system this replaces: an
//! email needs an `@` and a `.` anywhere in it, nothing more.

/// A name needs at least two characters.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    name.chars().count() >= 2
}

/// An email needs an `@` and a `.`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// A password needs at least eight characters.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 8
}

/// Uppercases the first letter and lowercases the rest.
#[must_use]
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
