//! Lead-capture ("Get a Free Quote") form state.
//!
//! Nothing is sent anywhere yet; a submission is acknowledged and the form
//! is reset.

use std::fmt;

pub const ACKNOWLEDGMENT: &str = "Your inquiry has been submitted! We'll get back to you soon.";

pub const LICENSE_TYPES: [&str; 7] = [
    "Antivirus / Security",
    "Operating System",
    "Design / Creative Software",
    "Development Tools",
    "Office Suite",
    "Business Software",
    "Other",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Company,
    LicenseType,
    Message,
}

impl LeadField {
    pub fn label(self) -> &'static str {
        match self {
            LeadField::Name => "Name",
            LeadField::Email => "Email",
            LeadField::Company => "Company",
            LeadField::LicenseType => "License type",
            LeadField::Message => "Message",
        }
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub license_type: String,
    pub message: String,
}

impl LeadForm {
    pub fn field(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Company => &self.company,
            LeadField::LicenseType => &self.license_type,
            LeadField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: LeadField) -> &mut String {
        match field {
            LeadField::Name => &mut self.name,
            LeadField::Email => &mut self.email,
            LeadField::Company => &mut self.company,
            LeadField::LicenseType => &mut self.license_type,
            LeadField::Message => &mut self.message,
        }
    }

    /// Required fields that are still blank, in form order.
    pub fn missing_required(&self) -> Vec<LeadField> {
        [
            (LeadField::Name, &self.name),
            (LeadField::Email, &self.email),
            (LeadField::LicenseType, &self.license_type),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Accepts the inquiry and clears every field. The form is left untouched
    /// when a required field is missing.
    pub fn submit(&mut self) -> Result<&'static str, Vec<LeadField>> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(missing);
        }

        tracing::info!(license_type = %self.license_type, "quote request submitted");
        *self = Self::default();
        Ok(ACKNOWLEDGMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_lists_blank_fields_in_order() {
        let form = LeadForm {
            email: "a@b.co".into(),
            company: "ByteCorp".into(),
            ..Default::default()
        };
        assert_eq!(
            form.missing_required(),
            vec![LeadField::Name, LeadField::LicenseType]
        );
    }

    #[test]
    fn company_and_message_are_optional() {
        let form = LeadForm {
            name: "Sarah".into(),
            email: "sarah@bytecorp.com".into(),
            license_type: LICENSE_TYPES[1].into(),
            ..Default::default()
        };
        assert!(form.missing_required().is_empty());
    }

    #[test]
    fn field_mut_targets_the_named_field() {
        let mut form = LeadForm::default();
        form.field_mut(LeadField::Message).push_str("two seats");
        assert_eq!(form.message, "two seats");
        assert_ne!(form, LeadForm::default());
    }
}
