//! Sample contacts rendered by the `contact-card` binary.

use crate::config::Config;
use crate::models::{Contact, DisplayMode};

/// The three reference contacts: Andy Bek alone, with a phone, and Andrew
/// Bek sharing that phone plus an email.
pub fn sample_contacts(display_mode: DisplayMode) -> [Contact; 3] {
    [
        Contact::new("Andy", "Bek"),
        Contact::new("Andy", "Bek").with_phone("647-537-9271"),
        Contact::new("Andrew", "Bek")
            .with_phone("647-537-9271")
            .with_email("hey@andybek.com"),
    ]
    .map(|contact| contact.with_display_mode(display_mode))
}

/// Output lines for the configured display mode and format specifier.
///
/// Each contact contributes its debug form, short form and formatted form,
/// followed by two pairwise equality checks.
pub fn render(config: &Config) -> Vec<String> {
    let contacts = sample_contacts(config.display_mode);

    let mut lines: Vec<String> = contacts
        .iter()
        .flat_map(|contact| {
            [
                format!("{:?}", contact),
                contact.to_string(),
                contact.format(&config.format_spec),
            ]
        })
        .collect();

    let [first, second, third] = &contacts;
    lines.push(format!("c1 == c2: {}", first.equals(second)));
    lines.push(format!("c2 == c3: {}", second.equals(third)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_config() {
        let lines = render(&Config::default());
        assert_eq!(
            lines,
            vec![
                "Contact(name='An***', last_name='B**')",
                "BA",
                "Contact(name='Andy', last_name='Bek', phone='None', email='None')",
                "Contact(name='An***', last_name='B**')",
                "BA",
                "Contact(name='Andy', last_name='Bek', phone='647-537-9271', email='None')",
                "Contact(name='And****', last_name='B**')",
                "BA",
                "Contact(name='Andrew', last_name='Bek', phone='647-537-9271', email='hey@andybek.com')",
                "c1 == c2: true",
                "c2 == c3: true",
            ]
        );
    }

    #[test]
    fn test_render_show_mode_with_masked_spec() {
        let config = Config {
            display_mode: DisplayMode::Show,
            format_spec: "masked".to_string(),
            ..Config::default()
        };
        let lines = render(&config);
        // Debug form and "masked" format both follow the display mode
        assert_eq!(lines[0], lines[2]);
        assert_eq!(
            lines[0],
            "Contact(name='Andy', last_name='Bek', phone='None', email='None')"
        );
    }
}
