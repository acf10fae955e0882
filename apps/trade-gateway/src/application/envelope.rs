//! Uniform response envelope.
//!
//! Every gateway operation resolves to this one shape, success or not.
//! Callers branch on `success` and never need to parse transport errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized result of a gateway operation.
///
/// `data` carries the terminal's raw payload, forwarded opaquely. It is
/// `None` on failure and always serialized, so failure bodies show
/// `"data": null` rather than omitting the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable outcome, never empty.
    pub message: String,
    /// Raw backend payload for successful operations.
    #[serde(default)]
    pub data: Option<Value>,
}

impl Envelope {
    /// Build a success envelope wrapping the backend's raw result.
    #[must_use]
    pub fn ok(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Build a failure envelope. `data` is always null.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_wraps_payload() {
        let envelope = Envelope::ok("order accepted", json!("A123"));
        assert!(envelope.success);
        assert_eq!(envelope.message, "order accepted");
        assert_eq!(envelope.data, Some(json!("A123")));
    }

    #[test]
    fn failure_has_no_data() {
        let envelope = Envelope::failure("buy order failed: timeout");
        assert!(!envelope.success);
        assert_eq!(envelope.data, None);
    }

    #[test]
    fn failure_serializes_data_as_explicit_null() {
        let body = serde_json::to_string(&Envelope::failure("nope")).unwrap();
        assert!(body.contains(r#""data":null"#));
    }

    #[test]
    fn ok_serializes_payload_verbatim() {
        let envelope = Envelope::ok("query ok", json!({"available": 8000.5}));
        let body = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "query ok",
                "data": {"available": 8000.5}
            })
        );
    }

    #[test]
    fn deserializes_with_missing_data_field() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
        assert_eq!(envelope.data, None);
    }
}
