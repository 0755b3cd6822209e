#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use super::form::{FieldError, looks_like_email, require};
use crate::net::types::BillingDetails;

/// Billing form state for the checkout page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub country: String,
}

impl CheckoutForm {
    /// Validate all fields. An empty result means the form may be
    /// submitted.
    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, "full_name", &self.full_name, "Full name");
        require(&mut errors, "email", &self.email, "Email");
        if !self.email.trim().is_empty() && !looks_like_email(&self.email) {
            errors.push(FieldError::new(
                "email",
                "Enter a valid email address".to_owned(),
            ));
        }
        require(&mut errors, "country", &self.country, "Country");
        errors
    }

    /// Trimmed billing details for the checkout request. Call only after
    /// [`validate`](Self::validate) returns no errors.
    #[must_use]
    pub fn billing_details(&self) -> BillingDetails {
        BillingDetails {
            full_name: self.full_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            country: self.country.trim().to_owned(),
        }
    }
}
