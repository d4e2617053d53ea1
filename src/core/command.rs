use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Io {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::DuplicateKey { message } => { message.as_str() }
            CommandError::NotFound { message } => { message.as_str() }
            CommandError::Io { message } => { message.as_str() }
            CommandError::Serialization { message } => { message.as_str() }
            CommandError::Validation { message, .. } => { message.as_str() }
        }
    }

    /// True when a load failed because the file content is unusable.
    pub fn is_malformed_content(&self) -> bool {
        matches!(self, CommandError::DuplicateKey { .. } |
            CommandError::Serialization { .. } | CommandError::Validation { .. })
    }
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Io { message, .. } => {
                CommandError::Io { message }
            }
        }
    }
}
