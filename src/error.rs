use thiserror::Error;

/// Raised while turning a decoded payload into a model.
///
/// `field` is the dotted path of the offending value inside the item, e.g.
/// `item.snippet.title`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("missing field `{field}` in `{object}`")]
    MissingField { object: String, field: String },
    #[error("field `{field}` should be {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("field `{field}` has invalid value `{value}`: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum YoutubeError {
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("State error: {0}")]
    State(String),
    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        reason: Option<String>,
        message: String,
    },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Config error: {0}")]
    Config(#[from] figment::Error),
}
