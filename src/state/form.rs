//! Field-level validation shared by the checkout form and the wizard.
//!
//! Checks run client-side before any request is sent; failures are
//! reported inline next to the offending field, never as a global toast.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// A validation failure attached to one named field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// Stable field key the form uses to position the message.
    pub field: &'static str,
    /// Human-readable message shown next to the field.
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// First error message for a field, if any. Convenience for inline display.
#[must_use]
pub fn message_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|err| err.field == field)
        .map(|err| err.message.as_str())
}

/// Require a non-blank value.
pub fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{label} is required")));
    }
}

/// Loose email shape check: something before and after a single `@`, with
/// a dot in the domain part. Deliverability is the backend's problem.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
