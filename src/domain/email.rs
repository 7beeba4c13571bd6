//! EmailAddress value object.

use super::errors::ValidationError;

/// A validated email address.
///
/// The check is intentionally shallow: exactly one `@`, a non-empty local
/// part, and a dotted domain with no empty labels.
///
/// # Example
///
/// ```
/// use contact_card::domain::EmailAddress;
///
/// let email = EmailAddress::new("hey@andybek.com").unwrap();
/// assert_eq!(email.into_inner(), "hey@andybek.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Validate email format.
    fn is_valid(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || domain.contains('@') {
            return false;
        }

        domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("hey@andybek.com").unwrap();
        assert_eq!(email.into_inner(), "hey@andybek.com");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(EmailAddress::new("invalid").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("user@").is_err());
        assert!(EmailAddress::new("user@domain").is_err());
        assert!(EmailAddress::new("user@@example.com").is_err());
        assert!(EmailAddress::new("user@example..com").is_err());
        assert!(EmailAddress::new("user.name+tag@example.co.uk").is_ok());
    }

    #[test]
    fn test_email_rejection_carries_input() {
        assert_eq!(
            EmailAddress::new("nope"),
            Err(ValidationError::InvalidEmail("nope".to_string()))
        );
    }
}
