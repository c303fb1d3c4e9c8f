//! Draft form for a new contact, with reactive validity.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::contact::NewContact;

/// Permissive email shape: non-space, '@', non-space, '.', non-space.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

/// Minimum phone length (characters) before submission is allowed.
const MIN_PHONE_LEN: usize = 10;

/// Draft fields for a new contact.
///
/// Validity is computed, not stored: submission should be disabled unless
/// [`is_valid`](ContactForm::is_valid) holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// True when the email matches the permissive pattern.
    pub fn is_email_valid(&self) -> bool {
        EMAIL_RE.is_match(&self.email)
    }

    /// True iff the name is non-empty after trimming, the email matches the
    /// pattern, and the phone is at least 10 characters long.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.is_email_valid()
            && self.phone.chars().count() >= MIN_PHONE_LEN
    }

    /// Reset the draft to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The draft as an insert payload. Only meaningful when
    /// [`is_valid`](ContactForm::is_valid) holds.
    pub fn to_new_contact(&self) -> NewContact {
        NewContact::new(self.name.clone(), self.email.clone(), self.phone.clone())
    }
}
