//! Network layer: wire DTOs, error taxonomy, and HTTP gateway helpers.
//!
//! ARCHITECTURE
//! ============
//! All backend communication goes through this module. Functions are
//! cfg-split so real `gloo-net` calls compile only under the `hydrate`
//! feature while SSR builds get inert stubs.

pub mod api;
pub mod error;
pub mod gateway;
pub mod types;
