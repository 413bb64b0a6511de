use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the `blog-client` library.
pub enum BlogClientError {
    /// The API answered with a non-2xx status.
    ///
    /// `reason` is the status phrase, e.g. `Internal Server Error`.
    #[error("API error: {reason}")]
    Api {
        /// HTTP status of the response.
        status: StatusCode,
        /// Status phrase shown to the user.
        reason: String,
    },

    /// The request never produced a response (connection refused, DNS, body read).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON of the expected shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// A post was decoded but carries values the model does not accept.
    #[error("invalid post {id}: {field} {message}")]
    InvalidPost {
        /// Identifier of the rejected post.
        id: i64,
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        message: &'static str,
    },

    /// A write payload failed the presence check; nothing was sent.
    #[error("invalid input: {field} {message}")]
    InvalidInput {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        message: &'static str,
    },
}

/// Result of `blog-client` operations.
pub type BlogClientResult<T> = Result<T, BlogClientError>;

impl BlogClientError {
    pub(crate) fn from_http_status(status: StatusCode) -> Self {
        let reason = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_u16().to_string());
        Self::Api { status, reason }
    }

    /// HTTP status of the failed response, if the error came from one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }
}
