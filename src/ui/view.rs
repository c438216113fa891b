//! Renderer-independent description of what the contact form shows.
//!
//! Every region carries a [`RegionId`] so tests and renderers can locate
//! error text and submitted values without depending on screen layout.

use crate::form::{ContactForm, FormField};

pub const FORM_HEADER: &str = "Contact Form";
pub const SUBMIT_LABEL: &str = "Submit";

/// Identity of a renderable region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionId {
    Header,
    Input(FormField),
    Error(FormField),
    SubmitButton,
    Display(FormField),
}

impl RegionId {
    /// Stable lookup id for the region
    pub fn test_id(&self) -> &'static str {
        match self {
            RegionId::Header => "header",
            RegionId::Input(field) => field.name(),
            RegionId::Error(_) => "error",
            RegionId::SubmitButton => "submit",
            RegionId::Display(FormField::FirstName) => "firstnameDisplay",
            RegionId::Display(FormField::LastName) => "lastnameDisplay",
            RegionId::Display(FormField::Email) => "emailDisplay",
            RegionId::Display(FormField::Message) => "messageDisplay",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: RegionId,
    pub text: String,
}

impl Region {
    fn new(id: RegionId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub field: FormField,
    pub label: &'static str,
    pub value: String,
    pub error: Option<Region>,
}

/// Everything the form renders for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormView {
    pub header: Region,
    pub inputs: Vec<InputView>,
    pub submit: Region,
    /// Submitted values, empty until a submit is accepted
    pub display: Vec<Region>,
}

impl ContactFormView {
    pub fn build(form: &ContactForm) -> Self {
        let inputs = FormField::ALL
            .iter()
            .map(|&field| InputView {
                field,
                label: field.label(),
                value: form.value(field).to_string(),
                error: form
                    .errors()
                    .get(field)
                    .map(|e| Region::new(RegionId::Error(field), e.to_string())),
            })
            .collect();

        let mut display = Vec::new();
        if let Some(snapshot) = form.snapshot() {
            display.push(Region::new(
                RegionId::Display(FormField::FirstName),
                format!("First Name: {}", snapshot.first_name()),
            ));
            display.push(Region::new(
                RegionId::Display(FormField::LastName),
                format!("Last Name: {}", snapshot.last_name()),
            ));
            display.push(Region::new(
                RegionId::Display(FormField::Email),
                format!("Email: {}", snapshot.email()),
            ));
            if let Some(message) = snapshot.message() {
                display.push(Region::new(
                    RegionId::Display(FormField::Message),
                    format!("Message: {}", message),
                ));
            }
        }

        Self {
            header: Region::new(RegionId::Header, FORM_HEADER),
            inputs,
            submit: Region::new(RegionId::SubmitButton, SUBMIT_LABEL),
            display,
        }
    }

    /// All regions in render order
    pub fn regions(&self) -> Vec<&Region> {
        let mut regions = vec![&self.header];
        for input in &self.inputs {
            if let Some(error) = &input.error {
                regions.push(error);
            }
        }
        regions.push(&self.submit);
        regions.extend(self.display.iter());
        regions
    }

    pub fn find_all_by_test_id(&self, test_id: &str) -> Vec<&Region> {
        self.regions()
            .into_iter()
            .filter(|r| r.id.test_id() == test_id)
            .collect()
    }

    pub fn find_by_test_id(&self, test_id: &str) -> Option<&Region> {
        self.find_all_by_test_id(test_id).into_iter().next()
    }

    /// Case-insensitive substring search over region text
    pub fn find_by_text(&self, needle: &str) -> Option<&Region> {
        let needle = needle.to_lowercase();
        self.regions()
            .into_iter()
            .find(|r| r.text.to_lowercase().contains(&needle))
    }

    pub fn input(&self, field: FormField) -> Option<&InputView> {
        self.inputs.iter().find(|i| i.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_form_has_no_errors_or_display() {
        let view = ContactFormView::build(&ContactForm::new());
        assert_eq!(view.header.text, "Contact Form");
        assert!(view.find_all_by_test_id("error").is_empty());
        assert!(view.display.is_empty());
        assert_eq!(view.inputs.len(), 4);
    }

    #[test]
    fn test_error_regions_follow_form_errors() {
        let mut form = ContactForm::new();
        form.submit();
        let view = ContactFormView::build(&form);

        assert_eq!(view.find_all_by_test_id("error").len(), 3);
        assert!(view.input(FormField::Message).unwrap().error.is_none());
        assert!(view.find_by_text("LASTNAME IS A REQUIRED FIELD").is_some());
    }

    #[test]
    fn test_display_ids() {
        assert_eq!(
            RegionId::Display(FormField::FirstName).test_id(),
            "firstnameDisplay"
        );
        assert_eq!(RegionId::Display(FormField::Message).test_id(), "messageDisplay");
        assert_eq!(RegionId::Error(FormField::Email).test_id(), "error");
    }
}
