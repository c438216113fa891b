use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::validation::{validate_all, validate_field, ValidationErrors};
use super::{FormField, FormFields};

/// Values captured by the last successful submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedSnapshot {
    first_name: String,
    last_name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl SubmittedSnapshot {
    fn capture(fields: &FormFields) -> Self {
        let message = if fields.message.trim().is_empty() {
            None
        } else {
            Some(fields.message.clone())
        };

        Self {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            email: fields.email.clone(),
            message,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Present only when a non-empty message was submitted
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Editing,
    Submitted,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(SubmittedSnapshot),
    Rejected { error_count: usize },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Contact form state: live fields, current errors and the last accepted snapshot
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: FormFields,
    errors: ValidationErrors,
    snapshot: Option<SubmittedSnapshot>,
    state: SubmissionState,
    touched: BTreeSet<FormField>,
    submit_count: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn value(&self, field: FormField) -> &str {
        self.fields.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn snapshot(&self) -> Option<&SubmittedSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    /// Number of submit attempts, accepted or not
    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    /// Replace a field's value and revalidate that field only
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set(field, value);
        self.revalidate(field);
    }

    pub fn push_char(&mut self, field: FormField, c: char) {
        self.fields.value_mut(field).push(c);
        self.revalidate(field);
    }

    pub fn push_str(&mut self, field: FormField, text: &str) {
        self.fields.value_mut(field).push_str(text);
        self.revalidate(field);
    }

    pub fn pop_char(&mut self, field: FormField) {
        self.fields.value_mut(field).pop();
        self.revalidate(field);
    }

    fn revalidate(&mut self, field: FormField) {
        self.touched.insert(field);
        self.errors
            .apply(field, validate_field(field, self.fields.get(field)));
    }

    /// Validate every field and, when all pass, capture a new snapshot
    ///
    /// A rejected submit leaves any earlier snapshot in place.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.submit_count += 1;
        self.errors = validate_all(&self.fields);

        if !self.errors.is_empty() {
            let error_count = self.errors.len();
            tracing::debug!(
                "Contact form submit #{} rejected with {} error(s)",
                self.submit_count,
                error_count
            );
            return SubmitOutcome::Rejected { error_count };
        }

        let snapshot = SubmittedSnapshot::capture(&self.fields);
        tracing::info!(
            "Contact form submit #{} accepted (message included: {})",
            self.submit_count,
            snapshot.message.is_some()
        );
        self.snapshot = Some(snapshot.clone());
        self.state = SubmissionState::Submitted;
        SubmitOutcome::Accepted(snapshot)
    }

    /// Clear inputs and errors; submission state and the last snapshot are kept
    pub fn reset(&mut self) {
        self.fields.clear();
        self.errors = ValidationErrors::new();
        self.touched.clear();
        tracing::debug!("Contact form reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(FormField::FirstName, "peter");
        form.set_field(FormField::LastName, "arguelles");
        form.set_field(FormField::Email, "testing@mdail.com");
        form
    }

    #[test]
    fn test_new_form_is_editing_and_clean() {
        let form = ContactForm::new();
        assert_eq!(form.state(), SubmissionState::Editing);
        assert!(form.errors().is_empty());
        assert!(form.snapshot().is_none());
        assert_eq!(form.submit_count(), 0);
    }

    #[test]
    fn test_incremental_validation_touches_one_field() {
        let mut form = ContactForm::new();
        form.set_field(FormField::FirstName, "123");

        assert_eq!(form.errors().len(), 1);
        assert!(form.errors().contains(FormField::FirstName));
        assert!(form.is_touched(FormField::FirstName));
        assert!(!form.is_touched(FormField::Email));
    }

    #[test]
    fn test_typing_clears_error_once_valid() {
        let mut form = ContactForm::new();
        for c in "pete".chars() {
            form.push_char(FormField::FirstName, c);
        }
        assert!(form.errors().contains(FormField::FirstName));

        form.push_char(FormField::FirstName, 'r');
        assert!(form.errors().is_empty());

        form.pop_char(FormField::FirstName);
        assert!(form.errors().contains(FormField::FirstName));
    }

    #[test]
    fn test_blank_submit_reports_three_errors() {
        let mut form = ContactForm::new();
        let outcome = form.submit();

        assert_eq!(outcome, SubmitOutcome::Rejected { error_count: 3 });
        assert!(!form.errors().contains(FormField::Message));
        assert_eq!(form.state(), SubmissionState::Editing);
        assert!(form.snapshot().is_none());
    }

    #[test]
    fn test_accepted_submit_captures_snapshot() {
        let mut form = filled_form();
        let outcome = form.submit();

        assert!(outcome.is_accepted());
        assert_eq!(form.state(), SubmissionState::Submitted);
        let snapshot = form.snapshot().unwrap();
        assert_eq!(snapshot.first_name(), "peter");
        assert_eq!(snapshot.last_name(), "arguelles");
        assert_eq!(snapshot.email(), "testing@mdail.com");
        assert_eq!(snapshot.message(), None);
    }

    #[test]
    fn test_whitespace_message_is_absent_from_snapshot() {
        let mut form = filled_form();
        form.set_field(FormField::Message, "   ");
        form.submit();
        assert_eq!(form.snapshot().unwrap().message(), None);

        form.set_field(FormField::Message, "hello");
        form.submit();
        assert_eq!(form.snapshot().unwrap().message(), Some("hello"));
    }

    #[test]
    fn test_rejected_submit_keeps_stale_snapshot() {
        let mut form = filled_form();
        form.submit();
        let accepted = form.snapshot().cloned();

        form.set_field(FormField::LastName, "");
        let outcome = form.submit();

        assert_eq!(outcome, SubmitOutcome::Rejected { error_count: 1 });
        assert_eq!(form.snapshot().cloned(), accepted);
        assert_eq!(form.state(), SubmissionState::Submitted);
    }

    #[test]
    fn test_editing_after_submit_does_not_touch_snapshot() {
        let mut form = filled_form();
        form.submit();

        form.set_field(FormField::FirstName, "paul");
        assert_eq!(form.snapshot().unwrap().first_name(), "peter");
        assert!(form.errors().contains(FormField::FirstName));
    }

    #[test]
    fn test_resubmit_is_idempotent() {
        let mut form = filled_form();
        let first = form.submit();
        let second = form.submit();

        assert_eq!(first, second);
        assert!(form.errors().is_empty());
        assert_eq!(form.submit_count(), 2);
    }

    #[test]
    fn test_reset_keeps_snapshot() {
        let mut form = filled_form();
        form.submit();
        form.reset();

        assert_eq!(form.fields(), &FormFields::default());
        assert!(form.errors().is_empty());
        assert!(!form.is_touched(FormField::Email));
        assert_eq!(form.state(), SubmissionState::Submitted);
        assert!(form.snapshot().is_some());
    }

    #[test]
    fn test_snapshot_json_omits_missing_message() {
        let mut form = filled_form();
        form.submit();
        let json = serde_json::to_value(form.snapshot().unwrap()).unwrap();

        assert_eq!(json["firstName"], "peter");
        assert!(json.get("message").is_none());
    }
}
