//! Person validation

use std::collections::HashSet;

use thiserror::Error;
use validator::ValidateEmail;

/// Errors that can occur during person validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PersonValidationError {
    #[error("Person ID cannot be empty")]
    EmptyId,

    #[error("Person ID cannot exceed {0} characters")]
    IdTooLong(usize),

    #[error("Person ID can only contain alphanumeric characters and hyphens")]
    InvalidIdCharacters,

    #[error("Person ID cannot start or end with a hyphen")]
    InvalidIdFormat,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("Name contains invalid character: '{0}'. Only letters are allowed")]
    InvalidNameCharacter(char),

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email is not a valid address")]
    InvalidEmail,
}

const MAX_PERSON_ID_LENGTH: usize = 64;
const MAX_NAME_LENGTH: usize = 50;

/// The set of letters accepted in person names.
///
/// The default alphabet accepts any Unicode letter; an explicit alphabet
/// restricts names to exactly the configured characters, so deployments can
/// pin the accepted locale (e.g. Latin plus Ukrainian Cyrillic).
#[derive(Debug, Clone, Default)]
pub struct NameAlphabet {
    letters: Option<HashSet<char>>,
}

impl NameAlphabet {
    /// Alphabet accepting any Unicode letter
    pub fn any_letter() -> Self {
        Self { letters: None }
    }

    /// Alphabet accepting exactly the given characters
    pub fn from_letters(letters: &str) -> Self {
        Self {
            letters: Some(letters.chars().collect()),
        }
    }

    /// Check whether a character belongs to the alphabet
    pub fn permits(&self, c: char) -> bool {
        match &self.letters {
            Some(set) => set.contains(&c),
            None => c.is_alphabetic(),
        }
    }
}

/// Validate a person ID
pub fn validate_person_id(id: &str) -> Result<(), PersonValidationError> {
    if id.is_empty() {
        return Err(PersonValidationError::EmptyId);
    }

    if id.len() > MAX_PERSON_ID_LENGTH {
        return Err(PersonValidationError::IdTooLong(MAX_PERSON_ID_LENGTH));
    }

    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(PersonValidationError::InvalidIdCharacters);
    }

    if id.starts_with('-') || id.ends_with('-') {
        return Err(PersonValidationError::InvalidIdFormat);
    }

    Ok(())
}

/// Validate a first or last name against the configured alphabet
pub fn validate_person_name(
    name: &str,
    alphabet: &NameAlphabet,
) -> Result<(), PersonValidationError> {
    if name.is_empty() {
        return Err(PersonValidationError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(PersonValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    for c in name.chars() {
        if !alphabet.permits(c) {
            return Err(PersonValidationError::InvalidNameCharacter(c));
        }
    }

    Ok(())
}

/// Validate email syntax
pub fn validate_email(email: &str) -> Result<(), PersonValidationError> {
    if email.is_empty() {
        return Err(PersonValidationError::EmptyEmail);
    }

    if !email.validate_email() {
        return Err(PersonValidationError::InvalidEmail);
    }

    Ok(())
}
