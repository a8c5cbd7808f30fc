//! Contact form validation.
//!
//! The checks are format sanity checks, not RFC validation: anything shaped
//! like `local@domain.tld` is an email, anything built from digits, whitespace,
//! hyphens, parentheses and plus signs is a phone number.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ValidationError, ValidationResult};
use crate::inquiry::InquiryFields;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern compiles")
});

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\x{FEFF}\-()+]+$").expect("phone pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Whitespace as browsers trim form input. Unlike `char::is_whitespace` it
/// includes U+FEFF and excludes U+0085.
fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Trim a form value the way the browser would before checking it.
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Validate the form before submission.
///
/// Checks run in order (required fields, email, phone) and the first failure
/// wins. Text fields are trimmed before checking; the inquiry type is a select
/// value and is only checked for emptiness.
pub fn validate(fields: &InquiryFields) -> ValidationResult<()> {
    let business_name = trim_input(&fields.business_name);
    let contact_person = trim_input(&fields.contact_person);
    let email = trim_input(&fields.email);
    let phone = trim_input(&fields.phone);
    let location = trim_input(&fields.location);
    let message = trim_input(&fields.message);

    let required = [
        business_name,
        contact_person,
        email,
        phone,
        location,
        fields.inquiry_type.as_str(),
        message,
    ];
    if required.iter().any(|value| value.is_empty()) {
        return Err(ValidationError::MissingRequired);
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    if !is_valid_phone(phone) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_fields() -> InquiryFields {
        InquiryFields {
            business_name: "Sunrise Ranch".to_string(),
            contact_person: "Jo Park".to_string(),
            email: "jo@sunrise.co".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "Ellensburg, WA".to_string(),
            inquiry_type: "retail".to_string(),
            volume: String::new(),
            message: "Need pricing".to_string(),
            products: Default::default(),
        }
    }

    fn clear_field(fields: &mut InquiryFields, index: usize, value: String) {
        match index {
            0 => fields.business_name = value,
            1 => fields.contact_person = value,
            2 => fields.email = value,
            3 => fields.phone = value,
            4 => fields.location = value,
            5 => fields.inquiry_type = String::new(),
            _ => fields.message = value,
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(validate(&valid_fields()), Ok(()));
    }

    #[test]
    fn volume_and_products_are_optional() {
        let fields = valid_fields();
        assert!(fields.volume.is_empty());
        assert_eq!(fields.products.summary(), "None selected");
        assert!(validate(&fields).is_ok());
    }

    #[test]
    fn whitespace_only_field_is_missing() {
        let mut fields = valid_fields();
        fields.location = "   \t ".to_string();
        assert_eq!(validate(&fields), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        let mut fields = valid_fields();
        fields.business_name = "\u{FEFF}".to_string();
        assert_eq!(validate(&fields), Err(ValidationError::MissingRequired));

        let mut fields = valid_fields();
        fields.message = " \u{FEFF}\u{00A0}\u{2028} ".to_string();
        assert_eq!(validate(&fields), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn byte_order_mark_around_email_is_trimmed() {
        let mut fields = valid_fields();
        fields.email = "\u{FEFF}a@b.co\u{FEFF}".to_string();
        assert!(validate(&fields).is_ok());
        assert_eq!(trim_input("\u{FEFF} Jo \u{FEFF}"), "Jo");
        assert_eq!(trim_input("\u{0085}Jo"), "\u{0085}Jo");
    }

    #[test]
    fn required_check_runs_before_format_checks() {
        let mut fields = valid_fields();
        fields.email = "not-an-email".to_string();
        fields.message = String::new();
        assert_eq!(validate(&fields), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn email_is_trimmed_before_matching() {
        let mut fields = valid_fields();
        fields.email = "  a@b.co  ".to_string();
        assert!(validate(&fields).is_ok());
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("a@bco"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("5551234567"));
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone("555.123.4567"));
        assert!(!is_valid_phone("ext#12"));
    }

    #[test]
    fn invalid_phone_is_reported_after_email() {
        let mut fields = valid_fields();
        fields.phone = "555 123 4567 x12".to_string();
        assert_eq!(validate(&fields), Err(ValidationError::InvalidPhone));

        fields.email = "nope".to_string();
        assert_eq!(validate(&fields), Err(ValidationError::InvalidEmail));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: any required field left empty or whitespace-only fails validation.
        #[test]
        fn any_empty_required_field_fails(
            index in 0usize..7,
            blank in "[ \t\n\\x{FEFF}]{0,4}"
        ) {
            let mut fields = valid_fields();
            clear_field(&mut fields, index, blank);
            prop_assert_eq!(validate(&fields), Err(ValidationError::MissingRequired));
        }

        /// Property: `local@domain.tld` shaped addresses pass the email check.
        #[test]
        fn well_shaped_emails_pass(
            email in "[a-z0-9._%+-]{1,12}@[a-z0-9-]{1,12}\\.[a-z]{2,6}"
        ) {
            prop_assert!(is_valid_email(&email));
        }

        /// Property: an address without an `@` never passes.
        #[test]
        fn emails_without_at_fail(email in "[a-z0-9.]{0,20}") {
            prop_assert!(!is_valid_email(&email));
        }

        /// Property: one foreign character anywhere makes the phone invalid.
        #[test]
        fn phone_with_foreign_character_fails(
            prefix in "[0-9 ()+-]{0,8}",
            bad in "[a-zA-Z#*./,_]",
            suffix in "[0-9 ()+-]{0,8}"
        ) {
            let mut fields = valid_fields();
            fields.phone = format!("5{prefix}{bad}{suffix}5");
            prop_assert_eq!(validate(&fields), Err(ValidationError::InvalidPhone));
        }

        /// Property: phones built only from allowed characters pass.
        #[test]
        fn phone_with_allowed_characters_passes(phone in "[0-9][0-9 ()+-]{0,15}") {
            prop_assert!(is_valid_phone(&phone));
        }
    }
}
