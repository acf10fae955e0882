//! Bridge-specific error types.

use thiserror::Error;

use crate::application::ports::TerminalError;

/// Errors raised inside the bridge adapter.
#[derive(Debug, Clone, Error)]
pub enum BridgeError {
    /// HTTP transport failure (connect refused, broken pipe, DNS).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The bridge answered non-2xx with a structured error body.
    #[error("bridge error: {code} - {message}")]
    Api {
        /// Bridge-reported error code, or the HTTP status when absent.
        code: String,
        /// Bridge-reported message.
        message: String,
    },

    /// The terminal refused the instruction (4xx from the bridge).
    #[error("entrust rejected: {0}")]
    Rejected(String),

    /// The bridge knows no entrust with this id.
    #[error("entrust not found: {order_id}")]
    NotFound {
        /// The id that matched nothing.
        order_id: String,
    },

    /// The request exceeded the configured per-call timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// The bound that was exceeded.
        timeout_secs: u64,
    },

    /// Response body could not be decoded.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),
}

impl From<BridgeError> for TerminalError {
    fn from(err: BridgeError) -> Self {
        match err {
            BridgeError::Http(message) => Self::Connection { message },
            BridgeError::Api { code, message } => Self::Automation {
                message: format!("{code}: {message}"),
            },
            BridgeError::Rejected(reason) => Self::Rejected { reason },
            BridgeError::NotFound { order_id } => Self::UnknownEntrust { order_id },
            BridgeError::Timeout { timeout_secs } => Self::Timeout { timeout_secs },
            BridgeError::JsonParse(message) => Self::Protocol { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_become_connection_errors() {
        let err = TerminalError::from(BridgeError::Http("connection refused".to_string()));
        assert!(matches!(err, TerminalError::Connection { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn api_errors_become_automation_faults() {
        let err = TerminalError::from(BridgeError::Api {
            code: "ui_automation".to_string(),
            message: "main window not found".to_string(),
        });
        assert!(matches!(err, TerminalError::Automation { .. }));
        assert!(err.to_string().contains("main window not found"));
    }

    #[test]
    fn rejections_carry_the_reason() {
        let err = TerminalError::from(BridgeError::Rejected("price outside limit".to_string()));
        assert!(matches!(err, TerminalError::Rejected { .. }));
        assert!(err.to_string().contains("price outside limit"));
    }

    #[test]
    fn not_found_becomes_unknown_entrust() {
        let err = TerminalError::from(BridgeError::NotFound {
            order_id: "999".to_string(),
        });
        assert!(matches!(err, TerminalError::UnknownEntrust { .. }));
    }

    #[test]
    fn timeouts_keep_the_bound() {
        let err = TerminalError::from(BridgeError::Timeout { timeout_secs: 30 });
        assert!(matches!(
            err,
            TerminalError::Timeout { timeout_secs: 30 }
        ));
    }

    #[test]
    fn decode_failures_become_protocol_errors() {
        let err = TerminalError::from(BridgeError::JsonParse("expected value".to_string()));
        assert!(matches!(err, TerminalError::Protocol { .. }));
    }
}
