// Page error taxonomy
// Every handler failure converges on `PageError`; the dispatcher's funnel is
// the only place that turns one into a response

use hyper::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    /// Unknown course/faculty id or unmatched route (status 404).
    #[error("{0}")]
    NotFound(String),
    /// Unexpected failure, including the forced diagnostic error (status 500).
    #[error("{0}")]
    Internal(String),
    /// A page template failed to render (status 500).
    #[error("failed to render template: {0}")]
    Render(#[from] askama::Error),
}

impl PageError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
