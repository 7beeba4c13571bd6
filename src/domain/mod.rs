//! Domain value objects and types.
//!
//! These value objects back the opt-in validated constructor
//! [`Contact::validated`](crate::Contact::validated). The plain constructor
//! stores whatever strings it is given; this module is where the rules for a
//! well-formed name, email address and phone number live.

pub mod email;
pub mod errors;
pub mod person_name;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use person_name::PersonName;
pub use phone::PhoneNumber;
