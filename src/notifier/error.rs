use std::fmt;

/// Errors surfaced by the update notifier
#[derive(Debug)]
pub enum NotifierError {
    /// Caller contract violation: empty version string, zero snooze window
    InvalidArgument(String),
    /// The prompt service failed to open the update prompt
    PresentationFailure(String),
}

impl fmt::Display for NotifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifierError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            NotifierError::PresentationFailure(msg) => {
                write!(f, "Failed to open update prompt: {}", msg)
            }
        }
    }
}

impl std::error::Error for NotifierError {}
