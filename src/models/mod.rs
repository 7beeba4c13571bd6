//! Data models for contact records.

pub mod contact;
pub mod display_mode;

pub use contact::{obfuscate, Contact};
pub use display_mode::DisplayMode;
