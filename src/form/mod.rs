pub mod submission;
pub mod validation;

pub use submission::{ContactForm, SubmissionState, SubmitOutcome, SubmittedSnapshot};
pub use validation::{
    validate_all, validate_field, ValidationError, ValidationErrors, FIRST_NAME_MIN_LEN,
};

use serde::{Deserialize, Serialize};

/// Contact form field identifiers, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Message,
    ];

    /// Key used in validation messages
    pub fn name(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }

    /// Human readable input label
    pub fn label(&self) -> &'static str {
        match self {
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Message)
    }

    /// Move to the next field, wrapping around
    pub fn next(&self) -> Self {
        match self {
            FormField::FirstName => FormField::LastName,
            FormField::LastName => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::FirstName,
        }
    }

    /// Move to the previous field, wrapping around
    pub fn previous(&self) -> Self {
        match self {
            FormField::FirstName => FormField::Message,
            FormField::LastName => FormField::FirstName,
            FormField::Email => FormField::LastName,
            FormField::Message => FormField::Email,
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Live values of the four contact form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
