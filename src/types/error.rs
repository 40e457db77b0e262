use thiserror::Error;

/// Errors that can occur while polling the widget endpoint.
#[derive(Error, Debug)]
pub enum PresenceError {
    /// Transport failure or non-2xx status from the presence source
    #[error("presence source unavailable: {0}")]
    SourceUnavailable(String),

    /// Response body did not parse as a widget document
    #[error("malformed widget response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Invalid refresher configuration (missing guild id, missing sink, etc.)
    #[error("configuration error: {0}")]
    Config(String),

    /// URL parse error (malformed endpoint)
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// System clipboard was unavailable or rejected the write
    #[error("clipboard error: {0}")]
    Clipboard(String),
}

/// Convenience type alias for `Result<T, PresenceError>`.
pub type Result<T> = std::result::Result<T, PresenceError>;
