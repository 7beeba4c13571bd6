//! PersonName value object.

use super::errors::ValidationError;

/// A first or last name that is guaranteed to contain at least one
/// non-whitespace character.
///
/// A `PersonName` always has a first character, so the short form of a
/// contact built from two of them is never degenerate.
///
/// # Example
///
/// ```
/// use contact_card::domain::PersonName;
///
/// let name = PersonName::new("name", "Andy").unwrap();
/// assert_eq!(name.into_inner(), "Andy");
/// assert!(PersonName::new("name", "   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName. `field` names the attribute being validated
    /// and is reported back in the error.
    ///
    /// The value is stored as given; surrounding whitespace is not trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the value is empty or blank.
    pub fn new(field: &'static str, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName(field));
        }
        Ok(Self(name))
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
    fn test_person_name_valid() {
        let name = PersonName::new("name", "Andy").unwrap();
        assert_eq!(name.into_inner(), "Andy");
    }

    #[test]
    fn test_person_name_rejects_empty_and_blank() {
        assert_eq!(
            PersonName::new("name", ""),
            Err(ValidationError::EmptyName("name"))
        );
        assert_eq!(
            PersonName::new("last_name", " \t"),
            Err(ValidationError::EmptyName("last_name"))
        );
    }

    #[test]
    fn test_person_name_keeps_whitespace() {
        let name = PersonName::new("name", " Andy").unwrap();
        assert_eq!(name.into_inner(), " Andy");
    }

    #[test]
    fn test_person_name_multibyte() {
        let name = PersonName::new("name", "Élodie").unwrap();
        assert_eq!(name.into_inner(), "Élodie");
    }
}
