//! Action records delivered by the host dispatcher.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A discrete action record.
///
/// Follows the flux-standard-action shape: `type` identifies the action,
/// `payload` carries the value (or the failure when `error` is set) and
/// `meta` carries anything else the host wants to attach.
///
/// # Example
///
/// ```rust
/// use phase_reducer::core::Action;
/// use serde_json::json;
///
/// let action: Action =
///     serde_json::from_value(json!({"type": "FETCH_REJECTED", "error": true, "payload": "oops"}))
///         .unwrap();
///
/// assert_eq!(action, Action::failure("FETCH_REJECTED", json!("oops")));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl Action {
    /// Action with no payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Action whose payload is the failure value, with the error flag set.
    pub fn failure(kind: impl Into<String>, payload: Value) -> Self {
        Self::new(kind).with_payload(payload).with_error(true)
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// The payload, or `null` when absent.
    pub fn payload_or_null(&self) -> Value {
        self.payload.clone().unwrap_or(Value::Null)
    }
}
