//! Contact form state machine
//!
//! Holds field values, per-field errors and the submission status, and
//! applies the validation timing rules:
//!
//! - keystroke: clear that field's error and the failure banner; the email
//!   field alone is re-validated immediately
//! - blur: validate required fields that have content (empty fields are only
//!   flagged by a submit attempt)
//! - submit: validate every required field; any error aborts before the
//!   network is touched
//!
//! The network part lives in [`super::submission`]; this type only consumes
//! its [`SubmissionOutcome`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::submission::{ContactPayload, SubmissionOutcome};

/// Minimum trimmed length of the name field
pub const NAME_MIN_LENGTH: usize = 2;

/// Minimum trimmed length of the message field
pub const MESSAGE_MIN_LENGTH: usize = 10;

/// Soft limit shown by the message counter (not enforced)
pub const MESSAGE_SOFT_LIMIT: usize = 500;

/// `local@domain.tld`: one `@`, a dot after it, no whitespace anywhere
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Company,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Company,
        FormField::Message,
    ];

    /// Fields checked on submit and for button enablement
    pub const VALIDATED: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// HTML `name`/`id` attribute and relay field name
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Company => "company",
            FormField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Company => "Company",
            FormField::Message => "Project Details",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Company)
    }
}

/// Inline validation error for one field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Check an email address against the `local@domain.tld` shape.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required { field: "Email" });
    }
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

fn validate_min_length(field: FormField, value: &str, min: usize) -> Result<(), FieldError> {
    let length = value.trim().chars().count();
    if length == 0 {
        Err(FieldError::Required {
            field: field.label(),
        })
    } else if length < min {
        Err(FieldError::TooShort {
            field: field.label(),
            min,
        })
    } else {
        Ok(())
    }
}

/// Apply the rule for `field` to `value`.
pub fn validate_field(field: FormField, value: &str) -> Result<(), FieldError> {
    match field {
        FormField::Name => validate_min_length(field, value, NAME_MIN_LENGTH),
        FormField::Email => validate_email(value),
        FormField::Company => Ok(()),
        FormField::Message => validate_min_length(field, value, MESSAGE_MIN_LENGTH),
    }
}

/// Submission lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Handle for the delayed reset after a success. A reset is only applied if
/// the form is still showing the success it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

/// Field values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Message => &mut self.message,
        }
    }

    /// Payload as sent to the relay (surrounding whitespace removed)
    pub fn to_payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// Contact form model.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    errors: BTreeMap<FormField, FieldError>,
    focused: Option<FormField>,
    status: SubmissionStatus,
    /// Bumped on every success so stale reset tickets are ignored
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn value(&self, field: FormField) -> &str {
        self.fields.get(field)
    }

    pub fn error(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn errors(&self) -> &BTreeMap<FormField, FieldError> {
        &self.errors
    }

    pub fn focused(&self) -> Option<FormField> {
        self.focused
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(
            self.status,
            SubmissionStatus::Validating | SubmissionStatus::Submitting
        )
    }

    pub fn is_succeeded(&self) -> bool {
        self.status == SubmissionStatus::Succeeded
    }

    /// Failure banner text, if any
    pub fn banner(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused = Some(field);
    }

    /// Keystroke in `field`.
    pub fn input(&mut self, field: FormField, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();

        // Stale errors go first, before any fresh result for this keystroke
        self.errors.remove(&field);
        if matches!(self.status, SubmissionStatus::Failed(_)) {
            self.status = SubmissionStatus::Idle;
        }

        if field == FormField::Email && !self.fields.email.is_empty() {
            if let Err(e) = validate_email(&self.fields.email) {
                self.errors.insert(field, e);
            }
        }
    }

    /// `field` lost focus.
    pub fn blur(&mut self, field: FormField) {
        if self.focused == Some(field) {
            self.focused = None;
        }
        if !field.is_required() || self.value(field).is_empty() {
            return;
        }
        self.check(field);
    }

    fn check(&mut self, field: FormField) -> bool {
        match validate_field(field, self.value(field)) {
            Ok(()) => {
                self.errors.remove(&field);
                true
            }
            Err(e) => {
                self.errors.insert(field, e);
                false
            }
        }
    }

    /// Validate every required field, recording errors. Returns `true` when
    /// all pass.
    pub fn validate_all(&mut self) -> bool {
        FormField::VALIDATED
            .into_iter()
            .fold(true, |ok, field| self.check(field) && ok)
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
            && FormField::VALIDATED.into_iter().all(|field| {
                !self.errors.contains_key(&field)
                    && validate_field(field, self.value(field)).is_ok()
            })
    }

    /// Start a submission.
    ///
    /// Returns the payload to send, or `None` if a submission is already in
    /// flight or local validation failed (errors are then set and the status
    /// is back to `Idle`).
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.is_submitting() {
            return None;
        }
        self.status = SubmissionStatus::Validating;
        if !self.validate_all() {
            self.status = SubmissionStatus::Idle;
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        Some(self.fields.to_payload())
    }

    /// Record the outcome of a submission started with `begin_submit`.
    ///
    /// On success, returns a ticket for the delayed reset.
    pub fn finish(&mut self, outcome: &SubmissionOutcome, fallback_email: &str) -> Option<ResetTicket> {
        if outcome.is_success() {
            self.generation += 1;
            self.status = SubmissionStatus::Succeeded;
            return Some(ResetTicket(self.generation));
        }
        let message = outcome
            .failure_message(fallback_email)
            .unwrap_or_else(|| format!("Please email us at {}.", fallback_email));
        self.status = SubmissionStatus::Failed(message);
        None
    }

    /// Apply a delayed reset. Clears the form if it is still showing the
    /// success `ticket` was issued for.
    pub fn expire_success(&mut self, ticket: ResetTicket) -> bool {
        if self.status != SubmissionStatus::Succeeded || ticket.0 != self.generation {
            return false;
        }
        self.fields = ContactFields::default();
        self.errors.clear();
        self.focused = None;
        self.status = SubmissionStatus::Idle;
        true
    }

    /// Soft character counter for the message box, e.g. `"42/500"`
    pub fn message_counter(&self) -> String {
        format!("{}/{}", self.fields.message.chars().count(), MESSAGE_SOFT_LIMIT)
    }

    pub fn message_over_soft_limit(&self) -> bool {
        self.fields.message.chars().count() > MESSAGE_SOFT_LIMIT
    }

    /// Text of the submit button
    pub fn button_label(&self) -> &'static str {
        match self.status {
            SubmissionStatus::Succeeded => "Message Sent!",
            SubmissionStatus::Validating | SubmissionStatus::Submitting => "Sending...",
            _ => "Send Message",
        }
    }
}

/// Pre-filled `mailto:` link offered as a manual alternative to the form.
pub fn mailto_link(address: &str, fields: &ContactFields) -> String {
    let subject = if fields.name.trim().is_empty() {
        "Project inquiry".to_string()
    } else {
        format!("Project inquiry from {}", fields.name.trim())
    };
    let mut body = fields.message.trim().to_string();
    if !fields.company.trim().is_empty() {
        body = format!("{}\n\nCompany: {}", body, fields.company.trim());
    }
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.input(FormField::Name, "Ada");
        form.input(FormField::Email, "ada@example.com");
        form.input(FormField::Message, "We need a forecasting model");
        form
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("first.last@sub.example.org").is_ok());
        assert_eq!(validate_email("a"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("a@b"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("a@@b.com"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("a b@c.com"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("a@b.com "), Err(FieldError::InvalidEmail));
        assert_eq!(
            validate_email(""),
            Err(FieldError::Required { field: "Email" })
        );
    }

    #[test]
    fn test_name_rule_uses_trimmed_length() {
        assert!(validate_field(FormField::Name, " A ").is_err());
        assert!(validate_field(FormField::Name, "Al").is_ok());
        assert_eq!(
            validate_field(FormField::Name, "A").unwrap_err().to_string(),
            "Name must be at least 2 characters"
        );
    }

    #[test]
    fn test_company_never_fails() {
        assert!(validate_field(FormField::Company, "").is_ok());
    }

    #[test]
    fn test_keystroke_clears_only_that_field() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_none());
        assert!(form.error(FormField::Name).is_some());
        assert!(form.error(FormField::Message).is_some());

        form.input(FormField::Name, "A");
        assert!(form.error(FormField::Name).is_none());
        assert!(form.error(FormField::Message).is_some());
    }

    #[test]
    fn test_email_revalidates_while_typing() {
        let mut form = ContactForm::new();
        form.input(FormField::Email, "ada@");
        assert_eq!(form.error(FormField::Email), Some(&FieldError::InvalidEmail));

        form.input(FormField::Email, "ada@example.com");
        assert!(form.error(FormField::Email).is_none());

        // Clearing the field entirely does not flag it while typing
        form.input(FormField::Email, "");
        assert!(form.error(FormField::Email).is_none());
    }

    #[test]
    fn test_blur_skips_empty_fields() {
        let mut form = ContactForm::new();
        form.focus(FormField::Name);
        form.blur(FormField::Name);
        assert!(form.error(FormField::Name).is_none());
        assert!(form.focused().is_none());

        form.input(FormField::Name, "A");
        form.blur(FormField::Name);
        assert!(form.error(FormField::Name).is_some());
    }

    #[test]
    fn test_emptying_email_clears_error_without_revalidating() {
        let mut form = ContactForm::new();
        form.input(FormField::Email, "ada@");
        assert_eq!(form.error(FormField::Email), Some(&FieldError::InvalidEmail));

        form.input(FormField::Email, "");
        assert!(form.error(FormField::Email).is_none());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_blur_flags_whitespace_only_field() {
        let mut form = ContactForm::new();
        form.input(FormField::Name, "   ");
        form.blur(FormField::Name);
        assert_eq!(
            form.error(FormField::Name),
            Some(&FieldError::Required { field: "Name" })
        );
        assert_eq!(
            form.error(FormField::Name).map(ToString::to_string).as_deref(),
            Some("Name is required")
        );
    }

    #[test]
    fn test_blur_ignores_company() {
        let mut form = ContactForm::new();
        form.input(FormField::Company, "x");
        form.blur(FormField::Company);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_can_submit_tracks_rules_and_errors() {
        let mut form = ContactForm::new();
        assert!(!form.can_submit());

        let form_ready = filled();
        assert!(form_ready.can_submit());

        form.input(FormField::Name, "Ada");
        form.input(FormField::Email, "ada@example.com");
        form.input(FormField::Message, "too short");
        assert!(!form.can_submit());
        form.input(FormField::Message, "long enough");
        assert!(form.can_submit());
    }

    #[test]
    fn test_begin_submit_moves_to_submitting() {
        let mut form = filled();
        let payload = form.begin_submit().unwrap();

        assert_eq!(payload.name, "Ada");
        assert_eq!(form.status(), &SubmissionStatus::Submitting);
        assert!(form.is_submitting());
        assert!(!form.can_submit());
        assert_eq!(form.button_label(), "Sending...");

        // Only one submission in flight
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_failed_banner_cleared_by_edit() {
        let mut form = filled();
        form.begin_submit();
        form.finish(
            &SubmissionOutcome::Rejected {
                status: 500,
                detail: None,
            },
            "x@y.z",
        );
        assert!(form.banner().unwrap().contains("500"));
        assert!(!form.is_submitting());

        form.input(FormField::Company, "Acme");
        assert!(form.banner().is_none());
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_success_reset_ticket() {
        let mut form = filled();
        form.begin_submit();
        let ticket = form.finish(&SubmissionOutcome::Delivered, "x@y.z").unwrap();
        assert_eq!(form.button_label(), "Message Sent!");

        assert!(form.expire_success(ticket));
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.fields(), &ContactFields::default());

        assert!(!form.expire_success(ticket));
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut form = filled();
        form.begin_submit();
        let first = form.finish(&SubmissionOutcome::Delivered, "x@y.z").unwrap();

        form.input(FormField::Message, "A second, different request");
        form.begin_submit();
        let second = form.finish(&SubmissionOutcome::DeliveredUnconfirmed, "x@y.z").unwrap();

        assert!(!form.expire_success(first));
        assert!(form.is_succeeded());
        assert!(form.expire_success(second));
    }

    #[test]
    fn test_message_counter() {
        let mut form = ContactForm::new();
        form.input(FormField::Message, "héllo");
        assert_eq!(form.message_counter(), "5/500");
        assert!(!form.message_over_soft_limit());

        form.input(FormField::Message, "x".repeat(501));
        assert!(form.message_over_soft_limit());
        // Soft limit only: still submittable on length grounds
        assert!(validate_field(FormField::Message, form.value(FormField::Message)).is_ok());
    }

    #[test]
    fn test_mailto_link_encodes() {
        let fields = ContactFields {
            name: "Ada Lovelace".to_string(),
            email: String::new(),
            company: "Analytical & Co".to_string(),
            message: "Hi there".to_string(),
        };
        let link = mailto_link("hello@mimir.dev", &fields);
        assert!(link.starts_with("mailto:hello@mimir.dev?subject=Project%20inquiry%20from%20Ada%20Lovelace"));
        assert!(link.contains("Analytical%20%26%20Co"));
    }
}
