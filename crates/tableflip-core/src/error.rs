//! Command errors.

use thiserror::Error;

/// Result type alias for argument parsing
pub type Result<T> = std::result::Result<T, CommandError>;

/// Raised when parsing stops on `-help` or an unrecognized flag.
///
/// The router turns this into an ephemeral response: `message` becomes the
/// response text and `help_text` the attachment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CommandError {
    pub message: String,
    pub help_text: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>, help_text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help_text: help_text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_message_only() {
        let err = CommandError::new("Unknown Argument: -x", "Available Arguments: -table");
        assert_eq!(err.to_string(), "Unknown Argument: -x");
        assert_eq!(err.help_text, "Available Arguments: -table");
    }
}
