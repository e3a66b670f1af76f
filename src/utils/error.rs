use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Pattern error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Slot lookup failed: {0}")]
    SlotsError(#[from] SlotsError),
}

/// Failure modes of a single available-slots request.
#[derive(Error, Debug)]
pub enum SlotsError {
    /// The request never produced a readable response.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("server answered {status}{}", status_suffix(.message))]
    Status {
        status: reqwest::StatusCode,
        message: Option<String>,
    },

    /// The body was not the expected JSON document.
    #[error("parse failure: {0}")]
    Parse(#[source] serde_json::Error),
}

fn status_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, ClientError>;
