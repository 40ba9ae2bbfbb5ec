use std::io;
use thiserror::Error;

use crate::command::Keyword;

/// Errors that can occur while driving the canvas
#[derive(Error, Debug)]
pub enum CanvasError {
    /// Drawing was attempted before any CREATE
    #[error("Canvas must first be created")]
    NotCreated,

    /// Too few arguments for a command
    #[error("Insufficient number of arguments for {keyword}: expected {expected}, got {actual}")]
    Arity {
        keyword: Keyword,
        expected: usize,
        actual: usize,
    },

    /// Argument could not be coerced to the required type
    #[error("Invalid argument: {0}")]
    Type(String),

    /// Non-orthogonal line or inverted rectangle
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Input line did not name a known command
    #[error("Unknown command, please repeat")]
    UnknownCommand,

    /// Configuration file could not be located, read or parsed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error related to IO operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CanvasError {
    /// Whether the session can report this error and keep reading commands.
    ///
    /// Command-level failures never touch the grid, so the session survives them.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotCreated
                | Self::Arity { .. }
                | Self::Type(_)
                | Self::InvalidShape(_)
                | Self::UnknownCommand
        )
    }
}

/// Type alias for Result with `CanvasError`
pub type Result<T> = std::result::Result<T, CanvasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_errors_are_recoverable() {
        assert!(CanvasError::NotCreated.is_recoverable());
        assert!(CanvasError::Type("x".into()).is_recoverable());
        assert!(CanvasError::InvalidShape("x".into()).is_recoverable());
        assert!(CanvasError::UnknownCommand.is_recoverable());
    }

    #[test]
    fn test_io_and_config_errors_are_fatal() {
        let io_err = CanvasError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(!io_err.is_recoverable());
        assert!(!CanvasError::Configuration("bad".into()).is_recoverable());
    }

    #[test]
    fn test_arity_message() {
        let err = CanvasError::Arity {
            keyword: Keyword::Create,
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient number of arguments for CREATE: expected 2, got 1"
        );
    }
}
