//! Contact model representing a single person.

use super::display_mode::DisplayMode;
use crate::domain::{EmailAddress, PersonName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, trace};

/// Placeholder rendered for an absent phone or email.
const ABSENT: &str = "None";

/// Format specifier that asks [`Contact::format`] to honour the display mode.
const MASKED_SPEC: &str = "masked";

/// A contact record.
///
/// # Equality and hashing
///
/// [`Contact::equals`] treats a shared email or a shared phone as proof of
/// the same person, falling back to the full name. That relation is not
/// transitive: `a` and `b` may share a phone, `b` and `c` an email, while `a`
/// and `c` share nothing. [`Contact::hash_value`] hashes all four fields, so
/// contacts that are `equals` may still hash differently.
///
/// Because of both properties `Contact` implements neither `PartialEq` nor
/// `Hash`; it must not be used as a `HashMap`/`HashSet` key.
#[derive(Clone, Serialize, Deserialize)]
pub struct Contact {
    /// First name
    pub name: String,

    /// Last name
    pub last_name: String,

    /// Phone number, kept exactly as given
    #[serde(default)]
    pub phone: Option<String>,

    /// Email address, kept exactly as given
    #[serde(default)]
    pub email: Option<String>,

    /// Controls the default (debug) representation only. Stored as the
    /// parsed [`DisplayMode`], so any non-`"masked"` string reads back as `"show"`.
    #[serde(default)]
    pub display_mode: DisplayMode,
}

impl Contact {
    /// Create a contact from a name and last name.
    ///
    /// Phone and email start absent and the display mode is
    /// [`DisplayMode::Masked`]. Nothing is validated; see
    /// [`Contact::validated`] for the checked variant.
    pub fn new(name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_name: last_name.into(),
            phone: None,
            email: None,
            display_mode: DisplayMode::default(),
        }
    }

    /// Create a contact with every field given positionally.
    pub fn with_all(
        name: impl Into<String>,
        last_name: impl Into<String>,
        phone: Option<String>,
        email: Option<String>,
        display_mode: DisplayMode,
    ) -> Self {
        Self {
            name: name.into(),
            last_name: last_name.into(),
            phone,
            email,
            display_mode,
        }
    }

    /// Create a contact after checking that both names are non-blank and
    /// that the phone and email, when given, are well formed.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` encountered, checking `name`,
    /// `last_name`, `phone` and `email` in that order.
    pub fn validated(
        name: impl Into<String>,
        last_name: impl Into<String>,
        phone: Option<String>,
        email: Option<String>,
        display_mode: DisplayMode,
    ) -> Result<Self, ValidationError> {
        Self::checked(name.into(), last_name.into(), phone, email, display_mode)
            .inspect_err(|e| debug!("Rejected contact: {}", e))
    }

    fn checked(
        name: String,
        last_name: String,
        phone: Option<String>,
        email: Option<String>,
        display_mode: DisplayMode,
    ) -> Result<Self, ValidationError> {
        let name = PersonName::new("name", name)?.into_inner();
        let last_name = PersonName::new("last_name", last_name)?.into_inner();
        let phone = phone
            .map(PhoneNumber::new)
            .transpose()?
            .map(PhoneNumber::into_inner);
        let email = email
            .map(EmailAddress::new)
            .transpose()?
            .map(EmailAddress::into_inner);

        Ok(Self {
            name,
            last_name,
            phone,
            email,
            display_mode,
        })
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the display mode. Accepts a `DisplayMode` or any string.
    pub fn with_display_mode(mut self, display_mode: impl Into<DisplayMode>) -> Self {
        self.display_mode = display_mode.into();
        self
    }

    /// Whether `self` and `other` describe the same person.
    ///
    /// Checked in order: a present email equal on both sides, then a present
    /// phone equal on both sides, then an exact match of name and last name.
    pub fn equals(&self, other: &Contact) -> bool {
        if self.email.is_some() && self.email == other.email {
            trace!("Contacts matched on email");
            return true;
        }

        if self.phone.is_some() && self.phone == other.phone {
            trace!("Contacts matched on phone");
            return true;
        }

        self.name == other.name && self.last_name == other.last_name
    }

    /// Like [`Contact::equals`], but for a value of unknown type. Anything
    /// that is not a `Contact` compares unequal.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Contact>()
            .is_some_and(|contact| self.equals(contact))
    }

    /// Hash of the tuple `(name, last_name, phone, email)`.
    ///
    /// Not consistent with [`Contact::equals`].
    pub fn hash_value(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        (&self.name, &self.last_name, &self.phone, &self.email).hash(&mut hasher);
        hasher.finish()
    }

    /// Representation governed by the display mode.
    ///
    /// Masked: `Contact(name='An***', last_name='B**')`. Otherwise the same
    /// output as [`Contact::format`] with `"unmasked"`.
    pub fn to_debug_string(&self) -> String {
        match self.display_mode {
            DisplayMode::Masked => format!(
                "Contact(name='{}', last_name='{}')",
                obfuscate(&self.name),
                obfuscate(&self.last_name)
            ),
            DisplayMode::Show => self.unmasked(),
        }
    }

    /// First letter of the last name followed by the first letter of the
    /// name, e.g. `"BA"` for Andy Bek.
    ///
    /// An empty name contributes nothing, so the result may be shorter than
    /// two characters.
    pub fn to_short_string(&self) -> String {
        self.last_name
            .chars()
            .take(1)
            .chain(self.name.chars().take(1))
            .collect()
    }

    /// Render according to a format specifier.
    ///
    /// `"masked"` defers to [`Contact::to_debug_string`]; every other
    /// specifier, including the empty one, reveals all four fields.
    pub fn format(&self, spec: &str) -> String {
        if spec == MASKED_SPEC {
            self.to_debug_string()
        } else {
            self.unmasked()
        }
    }

    fn unmasked(&self) -> String {
        format!(
            "Contact(name='{}', last_name='{}', phone='{}', email='{}')",
            self.name,
            self.last_name,
            self.phone.as_deref().unwrap_or(ABSENT),
            self.email.as_deref().unwrap_or(ABSENT)
        )
    }
}

impl fmt::Debug for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_debug_string())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_short_string())
    }
}

/// Keep the first half of `text` and replace the rest with asterisks.
///
/// With `half = chars / 2`, the output is the first `half` characters
/// followed by `half + 1` asterisks: `"Andy"` becomes `"An***"`.
pub fn obfuscate(text: &str) -> String {
    let half = text.chars().count() / 2;
    let mut obfuscated: String = text.chars().take(half).collect();
    obfuscated.push_str(&"*".repeat(half + 1));
    obfuscated
}
