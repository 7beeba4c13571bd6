//! PhoneNumber value object.

use super::errors::ValidationError;

/// Formatting characters allowed between the digits of a phone number.
const PHONE_PUNCTUATION: [char; 6] = [' ', '-', '(', ')', '+', '.'];

/// A validated phone number, kept exactly as written.
///
/// # Example
///
/// ```
/// use contact_card::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("647-537-9271").unwrap();
/// assert_eq!(phone.into_inner(), "647-537-9271");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must contain at least one digit
    /// - Can contain: digits, spaces, hyphens, parentheses, plus sign, periods
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    fn is_valid(phone: &str) -> bool {
        phone.chars().any(|c| c.is_ascii_digit())
            && phone
                .chars()
                .all(|c| c.is_ascii_digit() || PHONE_PUNCTUATION.contains(&c))
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}
