//! Integration tests for the textual forms of a contact.

use contact_card::{obfuscate, Contact, DisplayMode};

fn c1() -> Contact {
    Contact::new("Andy", "Bek")
}

fn c2() -> Contact {
    Contact::new("Andy", "Bek").with_phone("647-537-9271")
}

#[test]
fn test_new_contact_defaults() {
    let contact = c1();
    assert_eq!(contact.phone, None);
    assert_eq!(contact.email, None);
    assert_eq!(contact.display_mode, DisplayMode::Masked);
}

#[test]
fn test_masked_debug_string() {
    assert_eq!(c1().to_debug_string(), "Contact(name='An***', last_name='B**')");
    assert_eq!(format!("{:?}", c2()), "Contact(name='An***', last_name='B**')");
}

#[test]
fn test_shown_debug_string() {
    let c4 = c2().with_display_mode("show");
    assert_eq!(
        c4.to_debug_string(),
        "Contact(name='Andy', last_name='Bek', phone='647-537-9271', email='None')"
    );
}

#[test]
fn test_short_string() {
    assert_eq!(c1().to_short_string(), "BA");
    assert_eq!(c1().to_string(), "BA");
    assert_eq!(c2().with_display_mode("show").to_short_string(), "BA");
}

#[test]
fn test_format_unmasked_reveals_everything() {
    assert_eq!(
        c1().format("unmasked"),
        "Contact(name='Andy', last_name='Bek', phone='None', email='None')"
    );
    assert_eq!(
        c2().format("unmasked"),
        "Contact(name='Andy', last_name='Bek', phone='647-537-9271', email='None')"
    );
}

#[test]
fn test_format_any_other_spec_reveals_everything() {
    let expected = "Contact(name='Andy', last_name='Bek', phone='None', email='None')";
    assert_eq!(c1().format(""), expected);
    assert_eq!(c1().format("MASKED"), expected);
}

#[test]
fn test_format_masked_follows_display_mode() {
    assert_eq!(c1().format("masked"), "Contact(name='An***', last_name='B**')");

    let shown = c1().with_display_mode(DisplayMode::Show);
    assert_eq!(
        shown.format("masked"),
        "Contact(name='Andy', last_name='Bek', phone='None', email='None')"
    );
}

#[test]
fn test_obfuscate_reference_values() {
    assert_eq!(obfuscate("Andy"), "An***");
    assert_eq!(obfuscate("Bek"), "B**");
}

#[test]
fn test_mutating_display_mode_changes_debug_string() {
    let mut contact = c2();
    contact.display_mode = DisplayMode::Show;
    assert!(contact.to_debug_string().contains("647-537-9271"));
    contact.display_mode = DisplayMode::Masked;
    assert!(!contact.to_debug_string().contains("647-537-9271"));
}

#[test]
fn test_serde_round_trip_keeps_rendering() {
    let contact = Contact::new("Andrew", "Bek")
        .with_email("hey@andybek.com")
        .with_display_mode("show");
    let json = serde_json::to_string(&contact).unwrap();
    let back: Contact = serde_json::from_str(&json).unwrap();
    assert_eq!(back.to_debug_string(), contact.to_debug_string());
    assert_eq!(back.hash_value(), contact.hash_value());
}
