//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `cart`, `orderable`, etc.) so
//! individual components can depend on small focused models. Everything
//! here is pure and synchronous; pages own the async orchestration and
//! apply transitions to signals when responses arrive.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod form;
pub mod orderable;
pub mod wizard;
