//! Error taxonomy for the network gateway layer.
//!
//! ERROR HANDLING
//! ==============
//! Screens distinguish two situations: a failed list load leaves nothing
//! usable and blocks the whole screen behind a retry action, while a
//! failed persist is recovered locally (rollback or no-op) and surfaced as
//! a dismissible banner near the point of action. Both carry an `ApiError`
//! underneath; the split is a presentation decision, not an error type.

use thiserror::Error;

/// A failed request against the backend gateway.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed: network failure, CORS, abort.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status code.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response arrived but its body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Called during server-side rendering where no browser is available.
    #[error("only available in the browser")]
    ServerOnly,
}

impl ApiError {
    /// Whether the server rejected the session (sign-in required).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401 | 403))
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(inner) => Self::Decode(inner.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
