//! Field rules for lead submissions.
//!
//! Both checks trim their input first and count Unicode scalar values, so
//! `"  Al "` is a two-character name.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Minimum number of characters in a trimmed name.
pub const NAME_MIN_CHARS: usize = 2;
/// Minimum number of characters in a trimmed phone number.
pub const PHONE_MIN_CHARS: usize = 9;

/// Submission fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeadField {
    /// Contact name.
    Name,
    /// Contact phone number.
    Phone,
}

impl LeadField {
    /// Every field, in wire order.
    pub const ALL: [Self; 2] = [Self::Name, Self::Phone];

    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule broken by a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldViolation {
    /// The field was absent from the payload.
    Missing,
    /// The field was present but not a string.
    NotText,
    /// The trimmed value is shorter than `min` characters.
    TooShort {
        /// Minimum accepted length.
        min: usize,
    },
    /// The value contains characters outside the accepted set.
    InvalidCharacters,
}

impl FieldViolation {
    /// Render the client-facing message for a violation on `field`.
    ///
    /// # Examples
    /// ```
    /// use lead_contract::{FieldViolation, LeadField};
    ///
    /// let message = FieldViolation::TooShort { min: 2 }.message(LeadField::Name);
    /// assert_eq!(message, "name must contain at least 2 characters");
    /// ```
    #[must_use]
    pub fn message(self, field: LeadField) -> String {
        match self {
            Self::Missing => format!("{field} is required"),
            Self::NotText => format!("{field} must be a string"),
            Self::TooShort { min } => format!("{field} must contain at least {min} characters"),
            Self::InvalidCharacters => match field {
                LeadField::Phone => format!("{field} may only contain digits, '+' and spaces"),
                LeadField::Name => format!("{field} contains unsupported characters"),
            },
        }
    }
}

static PHONE_CHARSET_RE: OnceLock<Regex> = OnceLock::new();

fn phone_charset() -> &'static Regex {
    PHONE_CHARSET_RE.get_or_init(|| {
        // Length is checked separately; `\s` is Unicode-aware.
        Regex::new(r"^[0-9+\s]+$")
            .unwrap_or_else(|error| panic!("phone charset regex failed to compile: {error}"))
    })
}

/// Check a raw name and return its trimmed form.
///
/// # Errors
/// Returns [`FieldViolation::TooShort`] when fewer than [`NAME_MIN_CHARS`]
/// characters remain after trimming.
///
/// # Examples
/// ```
/// use lead_contract::check_name;
///
/// assert_eq!(check_name("  Al ").as_deref(), Ok("Al"));
/// assert!(check_name(" A ").is_err());
/// ```
pub fn check_name(raw: &str) -> Result<String, Vec<FieldViolation>> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < NAME_MIN_CHARS {
        return Err(vec![FieldViolation::TooShort {
            min: NAME_MIN_CHARS,
        }]);
    }
    Ok(trimmed.to_owned())
}

/// Check a raw phone number and return its trimmed form.
///
/// Length and character set are checked independently; a value that is both
/// too short and malformed reports both violations.
///
/// # Errors
/// Returns the violated rules when the trimmed value is shorter than
/// [`PHONE_MIN_CHARS`] or contains anything other than ASCII digits, `+` and
/// whitespace.
pub fn check_phone(raw: &str) -> Result<String, Vec<FieldViolation>> {
    let trimmed = raw.trim();
    let mut violations = Vec::new();
    if trimmed.chars().count() < PHONE_MIN_CHARS {
        violations.push(FieldViolation::TooShort {
            min: PHONE_MIN_CHARS,
        });
    }
    if !phone_charset().is_match(trimmed) {
        violations.push(FieldViolation::InvalidCharacters);
    }

    if violations.is_empty() {
        Ok(trimmed.to_owned())
    } else {
        Err(violations)
    }
}
