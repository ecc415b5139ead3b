//! Application error types.
//!
//! None of these are fatal: the poller and the dispatcher log them and carry
//! on with the next tick or the next click.

use terrarium_domain::error::DomainError;

/// Failure of a request to the terrarium server.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    /// The request never produced a response (network down, CORS, …).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server responded with HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error message extracted from the body, or the status text.
        message: String,
    },

    /// The server refused a control request and explained why in a JSON body.
    #[error("server rejected request with HTTP {status}: {body}")]
    Rejected {
        status: u16,
        body: serde_json::Value,
    },

    /// The response body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),

    /// A domain-level error (e.g. an empty command).
    #[error("domain error")]
    Domain(#[from] DomainError),
}

/// Failure to write into a page element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// No element with this id exists on the page.
    #[error("element #{0} not found")]
    MissingElement(String),

    /// The DOM rejected the update.
    #[error("failed to update element #{element_id}: {message}")]
    Dom {
        element_id: String,
        message: String,
    },
}
