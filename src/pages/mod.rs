//! Page components, one per route.

pub mod admin_categories;
pub mod admin_subcategories;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod course;
pub mod course_wizard;
pub mod login;
pub mod payment_result;
pub mod profile;
