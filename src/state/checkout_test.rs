use super::*;
use crate::state::form::message_for;

fn valid_form() -> CheckoutForm {
    CheckoutForm {
        full_name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        country: "GB".to_owned(),
    }
}

#[test]
fn valid_form_has_no_errors() {
    assert!(valid_form().validate().is_empty());
}

#[test]
fn empty_form_flags_every_field() {
    let errors = CheckoutForm::default().validate();
    assert!(message_for(&errors, "full_name").is_some());
    assert!(message_for(&errors, "email").is_some());
    assert!(message_for(&errors, "country").is_some());
}

#[test]
fn malformed_email_is_flagged() {
    let form = CheckoutForm {
        email: "not-an-email".to_owned(),
        ..valid_form()
    };
    let errors = form.validate();
    assert_eq!(
        message_for(&errors, "email"),
        Some("Enter a valid email address")
    );
}

#[test]
fn blank_email_gets_the_required_message_not_the_shape_message() {
    let form = CheckoutForm {
        email: "   ".to_owned(),
        ..valid_form()
    };
    let errors = form.validate();
    assert_eq!(message_for(&errors, "email"), Some("Email is required"));
}

#[test]
fn billing_details_are_trimmed() {
    let form = CheckoutForm {
        full_name: "  Ada Lovelace  ".to_owned(),
        email: " ada@example.com ".to_owned(),
        country: " GB ".to_owned(),
    };
    let billing = form.billing_details();
    assert_eq!(billing.full_name, "Ada Lovelace");
    assert_eq!(billing.email, "ada@example.com");
    assert_eq!(billing.country, "GB");
}
