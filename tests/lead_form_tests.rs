//! Integration tests for the quote request form

use softsell::lead::{ACKNOWLEDGMENT, LICENSE_TYPES, LeadField, LeadForm};

fn filled() -> LeadForm {
    LeadForm {
        name: "James R.".into(),
        email: "james@appworld.io".into(),
        company: "AppWorld".into(),
        license_type: LICENSE_TYPES[3].into(),
        message: "Ten unused IDE seats".into(),
    }
}

#[test]
fn test_submit_acknowledges_and_resets_every_field() {
    let mut form = filled();
    assert_eq!(form.submit(), Ok(ACKNOWLEDGMENT));

    for field in [
        LeadField::Name,
        LeadField::Email,
        LeadField::Company,
        LeadField::LicenseType,
        LeadField::Message,
    ] {
        assert_eq!(form.field(field), "", "{field} not cleared");
    }
    assert_eq!(form, LeadForm::default());
}

#[test]
fn test_submit_with_missing_required_keeps_input() {
    let mut form = filled();
    form.email.clear();
    form.license_type = "  ".into();
    let before = form.clone();

    assert_eq!(
        form.submit(),
        Err(vec![LeadField::Email, LeadField::LicenseType])
    );
    assert_eq!(form, before);
}

#[test]
fn test_required_fields_only() {
    let mut form = LeadForm::default();
    *form.field_mut(LeadField::Name) = "Sarah".into();
    *form.field_mut(LeadField::Email) = "sarah@bytecorp.com".into();
    *form.field_mut(LeadField::LicenseType) = "Other".into();

    assert!(form.submit().is_ok());
}
