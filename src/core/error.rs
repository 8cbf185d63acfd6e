use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Failure raised by an encoder. Encoding stops at the first one.
///
/// Every variant carries a stable code (e.g. `ECODABAR-2`) and a human message;
/// `Display` renders both as `"<code>: <message>"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Wrong length, bad start/stop character, or otherwise malformed input.
    #[error("{code}: {message}")]
    Structural { code: &'static str, message: String },
    /// A character outside the symbology's alphabet.
    #[error("{code}: {message}")]
    Charset { code: &'static str, message: String },
    /// Blank input or an unusable symbology identifier.
    #[error("{code}: {message}")]
    Configuration { code: &'static str, message: String },
}

impl EncodeError {
    pub fn structural(code: &'static str, message: impl Into<String>) -> Self {
        EncodeError::Structural {
            code,
            message: message.into(),
        }
    }

    pub fn charset(code: &'static str, message: impl Into<String>) -> Self {
        EncodeError::Charset {
            code,
            message: message.into(),
        }
    }

    pub fn configuration(code: &'static str, message: impl Into<String>) -> Self {
        EncodeError::Configuration {
            code,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EncodeError::Structural { .. } => ErrorKind::Structural,
            EncodeError::Charset { .. } => ErrorKind::Charset,
            EncodeError::Configuration { .. } => ErrorKind::Configuration,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            EncodeError::Structural { code, .. }
            | EncodeError::Charset { code, .. }
            | EncodeError::Configuration { code, .. } => *code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            EncodeError::Structural { message, .. }
            | EncodeError::Charset { message, .. }
            | EncodeError::Configuration { message, .. } => message,
        }
    }
}

/// Error taxonomy shared by all symbologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Structural,
    Charset,
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Structural => write!(f, "structural"),
            ErrorKind::Charset => write!(f, "charset"),
            ErrorKind::Configuration => write!(f, "configuration"),
        }
    }
}

/// Serializable entry of [`EncodedResult::errors`](crate::EncodedResult).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub kind: ErrorKind,
    pub code: String,
    pub message: String,
}

impl ErrorRecord {
    /// The verbatim line shown to users, e.g.
    /// `ECODABAR-2: Data format invalid. (Invalid START character)`.
    pub fn text(&self) -> String {
        format!("{}: {}", self.code, self.message)
    }
}

impl From<&EncodeError> for ErrorRecord {
    fn from(err: &EncodeError) -> Self {
        Self {
            kind: err.kind(),
            code: err.code().to_string(),
            message: err.message().to_string(),
        }
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}
