//! Reusable view components shared across pages.

pub mod course_card;
pub mod error_banner;
pub mod file_drop;
pub mod nav_bar;
pub mod orderable_admin;
