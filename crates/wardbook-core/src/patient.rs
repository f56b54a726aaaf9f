//! Patient records — validated contact fields plus the owned checkup set.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::checkup::Checkup;
use crate::error::{Result, ScheduleError};

/// A patient name.
///
/// Alphabetical runs joined by single spaces, hyphens, apostrophes, or
/// slashes: `Anna-Marie`, `Peter O'Neil`, `Jean/Luc`. Never blank, never
/// starting or ending with a separator. Surrounding whitespace is trimmed
/// before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Validate and construct a name.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidName` if the trimmed input is blank or
    /// contains anything other than letters joined by single separators.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if is_valid_name(trimmed) {
            Ok(Name(trimmed.to_string()))
        } else {
            Err(ScheduleError::InvalidName)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = ScheduleError;

    fn try_from(raw: String) -> Result<Self> {
        Name::new(&raw)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> String {
        name.0
    }
}

fn is_valid_name(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    // The start of the string acts like a separator: the first character
    // must open a letter run, and two separators may never be adjacent.
    let mut after_separator = true;
    for c in s.chars() {
        if c.is_ascii_alphabetic() {
            after_separator = false;
        } else if matches!(c, ' ' | '\'' | '-' | '/') {
            if after_separator {
                return false;
            }
            after_separator = true;
        } else {
            return false;
        }
    }
    !after_separator
}

/// An email address of the shape `local-part@domain`.
///
/// The local part is at least two characters, starts and ends alphanumeric,
/// and may contain `+`, `_`, `.`, `-` in between. The domain has at least
/// two dot-separated labels; each label is alphanumeric with internal
/// hyphens allowed, and the final label is at least two characters with no
/// hyphens at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an email address.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidEmail` if the input does not match the
    /// shape described above.
    pub fn new(raw: &str) -> Result<Self> {
        if is_valid_email(raw) {
            Ok(Email(raw.to_string()))
        } else {
            Err(ScheduleError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = ScheduleError;

    fn try_from(raw: String) -> Result<Self> {
        Email::new(&raw)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> String {
        email.0
    }
}

fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };

    if local.len() < 2
        || !local.starts_with(|c: char| c.is_ascii_alphanumeric())
        || !local.ends_with(|c: char| c.is_ascii_alphanumeric())
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'))
    {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    for label in &labels {
        if label.is_empty()
            || label.starts_with('-')
            || label.ends_with('-')
            || !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return false;
        }
    }

    let tld = labels[labels.len() - 1];
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphanumeric())
}

/// A patient record.
///
/// The checkup set is keyed purely on the moment through [`Checkup`]'s
/// equality. The assigned nurse only gates an advisory warning in the
/// scheduling outcome; it never affects correctness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<Email>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nurse: Option<String>,
    #[serde(default)]
    checkups: HashSet<Checkup>,
}

impl Patient {
    /// Create a patient with no contact details and no scheduled checkups.
    pub fn new(name: Name) -> Self {
        Patient {
            name,
            email: None,
            nurse: None,
            checkups: HashSet::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = Some(email);
    }

    /// The assigned nurse, if any.
    pub fn nurse(&self) -> Option<&str> {
        self.nurse.as_deref()
    }

    pub fn assign_nurse(&mut self, nurse: impl Into<String>) {
        self.nurse = Some(nurse.into());
    }

    pub fn has_nurse(&self) -> bool {
        self.nurse.is_some()
    }

    /// The patient's scheduled checkups, unordered.
    pub fn checkups(&self) -> &HashSet<Checkup> {
        &self.checkups
    }

    pub(crate) fn checkups_mut(&mut self) -> &mut HashSet<Checkup> {
        &mut self.checkups
    }
}
