use thiserror::Error;

/// Why a dispatched call produced no response body.
///
/// The `Display` text is what the client shows to the user, so transport
/// failures carry the underlying library message verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    #[error("{0}")]
    Transport(String),
    #[error("Request task ended without a result")]
    TaskEnded,
}

#[derive(Error, Debug)]
pub enum ClientBuildError {
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
