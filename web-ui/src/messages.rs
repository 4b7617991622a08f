// Message mapping for position client errors

use educator_graph_api_client::ApiError;

/// Message level for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Get CSS class for message level
pub fn message_class(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => "message-text",
        MessageLevel::Warning => "message-text warning",
        MessageLevel::Error => "message-text error",
    }
}

/// Level used when showing an error in the status line
pub fn error_level(error: &ApiError) -> MessageLevel {
    match error {
        ApiError::Validation(_) => MessageLevel::Warning,
        _ => MessageLevel::Error,
    }
}

/// User facing text for a client error
///
/// Server messages are shown unchanged; the server already words them
/// for people.
pub fn describe_error(error: &ApiError) -> String {
    match error {
        ApiError::Server { message, .. } => message.clone(),
        ApiError::Network(_) => {
            "The layout service is not responding. Check your connection and try again.".to_string()
        }
        ApiError::InvalidResponse(_) => {
            "The layout service sent a response that could not be read.".to_string()
        }
        ApiError::Validation(e) => format!("The layout could not be sent: {}", e),
    }
}
