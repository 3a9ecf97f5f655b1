use thiserror::Error;

/// A payload or parameter value does not conform to the declared schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{record}.{field}: {message} (received {received})")]
pub struct SchemaValidationError {
    /// Record being built, e.g. `ShortVacancy` or `SearchParams`.
    pub record: &'static str,
    /// Dotted path of the offending field.
    pub field: String,
    /// The offending value rendered as JSON, or `<missing>`.
    pub received: String,
    pub message: String,
}

impl SchemaValidationError {
    pub fn new(
        record: &'static str,
        field: impl Into<String>,
        received: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            record,
            field: field.into(),
            received: received.into(),
            message: message.into(),
        }
    }
}

/// The remote service answered with a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("hh.ru request failed with {status} {reason}")]
pub struct ApiRequestError {
    pub status: u16,
    pub reason: String,
    /// `description` from the error body, when the API sent one.
    pub description: Option<String>,
}

/// The request never produced a status and body.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("response body is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL `{url}`: {source}")]
    BaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("invalid value for header {name}")]
    HeaderValue {
        name: &'static str,
        source: reqwest::header::InvalidHeaderValue,
    },
}

/// Everything an API operation can fail with.
#[derive(Debug, Error)]
pub enum HhError {
    #[error(transparent)]
    Schema(#[from] SchemaValidationError),
    #[error(transparent)]
    Request(#[from] ApiRequestError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
