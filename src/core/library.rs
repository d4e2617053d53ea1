use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // Malformed JSON or a record missing one of its required fields.
    Serialization {
        message: String,
    },
    Io {
        message: String,
        kind: std::io::ErrorKind,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn io(message: &str, kind: std::io::ErrorKind) -> LibraryError {
        LibraryError::Io { message: message.to_string(), kind }
    }

    /// True when the stored content itself is unusable, as opposed to the file being unreachable.
    pub fn is_malformed_content(&self) -> bool {
        match self {
            LibraryError::Validation { .. } => { true }
            LibraryError::DuplicateKey { .. } => { true }
            LibraryError::Serialization { .. } => { true }
            LibraryError::NotFound { .. } => { false }
            LibraryError::Io { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::io(format!("io {}", err).as_str(), err.kind())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return LibraryError::from(std::io::Error::from(err));
        }
        LibraryError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code } => {
                match reason_code {
                    Some(reason) => write!(f, "{} {}", message, reason),
                    None => write!(f, "{}", message),
                }
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Io { message, .. } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// Labels are persisted verbatim, so the serde names are the Russian display strings.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    #[serde(rename = "В наличии")]
    InStock,
    #[serde(rename = "Выдана")]
    CheckedOut,
}

impl BookStatus {
    pub const IN_STOCK_LABEL: &'static str = "В наличии";
    pub const CHECKED_OUT_LABEL: &'static str = "Выдана";

    pub const IN_STOCK_CODE: &'static str = "1";
    pub const CHECKED_OUT_CODE: &'static str = "0";

    /// Maps a short status code typed at the console to a status.
    pub fn from_code(code: &str) -> Option<BookStatus> {
        match code {
            BookStatus::CHECKED_OUT_CODE => Some(BookStatus::CheckedOut),
            BookStatus::IN_STOCK_CODE => Some(BookStatus::InStock),
            _ => None,
        }
    }

    /// Maps a stored display label back to a status. Codes are not accepted here.
    pub fn from_label(label: &str) -> Option<BookStatus> {
        match label {
            BookStatus::IN_STOCK_LABEL => Some(BookStatus::InStock),
            BookStatus::CHECKED_OUT_LABEL => Some(BookStatus::CheckedOut),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookStatus::InStock => BookStatus::IN_STOCK_LABEL,
            BookStatus::CheckedOut => BookStatus::CHECKED_OUT_LABEL,
        }
    }
}

impl TryFrom<&str> for BookStatus {
    type Error = LibraryError;

    fn try_from(label: &str) -> Result<Self, Self::Error> {
        BookStatus::from_label(label).ok_or_else(|| {
            LibraryError::validation(format!("invalid book status {:?}", label).as_str(), None)
        })
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
