//! API client errors.

use thiserror::Error;

/// Failure of a single backend request.
///
/// Transport failures and non-2xx responses are both terminal for the
/// call that produced them; the client never retries or translates.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure, including JSON decode errors surfaced by
    /// the fetch layer.
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),

    /// The request did not complete within the client timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u32),

    /// The server answered with a non-2xx status.
    #[error("server returned {status} for {url}")]
    Status { status: u16, url: String },
}
