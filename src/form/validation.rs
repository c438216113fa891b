use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::{FormField, FormFields};

/// Minimum number of characters accepted for the first name
pub const FIRST_NAME_MIN_LEN: usize = 5;

/// Local part, `@`, then a domain with at least one dot
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A single failing rule for one field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is a required field")]
    Required { field: FormField },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: FormField, min: usize },

    #[error("{field} must be a valid email address")]
    InvalidEmail { field: FormField },
}

impl ValidationError {
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::InvalidEmail { field } => *field,
        }
    }
}

/// Errors for the fields currently failing validation
///
/// A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in display order
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &ValidationError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// Rendered error messages in display order
    pub fn messages(&self) -> Vec<String> {
        self.errors.values().map(|e| e.to_string()).collect()
    }

    /// Record the outcome of validating one field, inserting or clearing its entry
    pub(crate) fn apply(&mut self, field: FormField, result: Result<(), ValidationError>) {
        match result {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(error) => {
                self.errors.insert(field, error);
            }
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check one value against its field's rules
///
/// Rules run in priority order and only the first failure is reported.
pub fn validate_field(field: FormField, value: &str) -> Result<(), ValidationError> {
    if field.is_required() && is_blank(value) {
        return Err(ValidationError::Required { field });
    }

    match field {
        FormField::FirstName if value.chars().count() < FIRST_NAME_MIN_LEN => {
            Err(ValidationError::TooShort {
                field,
                min: FIRST_NAME_MIN_LEN,
            })
        }
        FormField::Email if !EMAIL_REGEX.is_match(value) => {
            Err(ValidationError::InvalidEmail { field })
        }
        _ => Ok(()),
    }
}

/// Validate every field from scratch
pub fn validate_all(fields: &FormFields) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in FormField::ALL {
        errors.apply(field, validate_field(field, fields.get(field)));
    }
    errors
}
