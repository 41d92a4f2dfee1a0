use thiserror::Error;

/// Failure reported by the server or by the transport talking to it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    /// The request was rejected before being sent.
    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The facade does not provide this operation.
    #[error("{method} is not implemented")]
    NotImplemented { method: &'static str },
    #[error("missing configuration: {0} is not set")]
    MissingConfig(&'static str),
}

impl Error {
    pub fn not_implemented(method: &'static str) -> Self {
        Error::NotImplemented { method }
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Error::NotImplemented { .. })
    }
}
