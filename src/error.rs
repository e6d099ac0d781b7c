use thiserror::Error;

/// Errors produced while preparing, sending or decoding a call.
///
/// Every variant renders to the human-readable message that ends up in a
/// failed [`Envelope`].
///
/// [`Envelope`]: crate::envelope::Envelope
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument (or the API key) was not provided.
    #[error("{0}")]
    MissingArgument(String),

    /// An argument was provided but could not be coerced to its declared kind.
    #[error("{0}")]
    InvalidArgument(String),

    /// The request failed, returned a non-success status or an empty body.
    #[error("{0}")]
    NoResponse(String),

    /// The configured base URL cannot carry path segments.
    #[error("base url {0} cannot be used for requests")]
    BaseUrl(String),

    /// A URL could not be assembled.
    #[error("{0}")]
    Url(#[from] url::ParseError),

    /// The HTTP client could not be built.
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` if the error was raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::MissingArgument(_) | Error::InvalidArgument(_))
    }
}
