//! Contact Card - a contact record value type with lenient equality and masked rendering.
//!
//! A [`Contact`] stores a name, last name, optional phone and optional email. Two
//! contacts are considered the same person when they share an email, share a
//! phone, or (failing both) share the full name. Rendering hides most of the
//! name by default and can be forced to reveal every field on request.
//!
//! # Architecture
//!
//! - **models**: The `Contact` type and its `DisplayMode`
//! - **domain**: Validating value objects used by `Contact::validated`
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **demo**: Sample contacts rendered by the binary
//!
//! # Example
//!
//! ```
//! use contact_card::Contact;
//!
//! let c1 = Contact::new("Andy", "Bek");
//! assert_eq!(c1.to_debug_string(), "Contact(name='An***', last_name='B**')");
//! assert_eq!(c1.to_short_string(), "BA");
//! assert_eq!(
//!     c1.format("unmasked"),
//!     "Contact(name='Andy', last_name='Bek', phone='None', email='None')"
//! );
//! ```

pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use domain::{EmailAddress, PersonName, PhoneNumber, ValidationError};
pub use error::{ConfigError, ConfigResult};
pub use models::{obfuscate, Contact, DisplayMode};
