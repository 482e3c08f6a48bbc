use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// Normalized failure from a remote API call.
///
/// Every failure — HTTP error status, unparseable body, or transport error —
/// collapses into this one shape so callers never have to handle
/// heterogeneous error payloads. When the server responded with a structured
/// JSON body it is carried in `body` verbatim; otherwise `body` is a
/// synthesized `{"detail": ...}` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    /// HTTP status of the failed response, if a response was received at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// The error payload as the caller should see it.
    pub body: Value,
}

impl ApiError {
    /// A server error response whose JSON body passes through unmodified.
    pub fn from_body(status: u16, body: Value) -> Self {
        Self {
            status: Some(status),
            body,
        }
    }

    /// An error response with no usable JSON body.
    pub fn opaque(status: u16, detail: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            body: json!({ "detail": detail.into() }),
        }
    }

    /// A failure with no response at all (connection refused, body cut off).
    pub fn transport(detail: impl Into<String>) -> Self {
        Self {
            status: None,
            body: json!({ "detail": detail.into() }),
        }
    }

    /// Human-readable message for display: the body's `detail` field when
    /// present, the whole body otherwise.
    pub fn detail(&self) -> String {
        match self.body.get("detail").and_then(Value::as_str) {
            Some(detail) => detail.to_string(),
            None => self.body.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "api error ({}): {}", status, self.detail()),
            None => write!(f, "api error: {}", self.detail()),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_body_carries_server_payload_verbatim() {
        let payload = json!({"detail": "Invalid credentials", "code": "auth"});
        let err = ApiError::from_body(401, payload.clone());

        assert_eq!(err.status, Some(401));
        assert_eq!(err.body, payload);
        assert_eq!(err.detail(), "Invalid credentials");
    }

    #[test]
    fn opaque_synthesizes_detail_body() {
        let err = ApiError::opaque(502, "Unknown error during login");
        assert_eq!(err.body, json!({"detail": "Unknown error during login"}));
    }

    #[test]
    fn detail_falls_back_to_whole_body() {
        let err = ApiError::from_body(400, json!({"username": ["required"]}));
        assert_eq!(err.detail(), r#"{"username":["required"]}"#);
    }

    #[test]
    fn display_includes_status_when_present() {
        let err = ApiError::opaque(503, "down");
        assert_eq!(format!("{}", err), "api error (503): down");

        let err = ApiError::transport("connection refused");
        assert_eq!(format!("{}", err), "api error: connection refused");
    }

    #[test]
    fn error_roundtrip_through_json() {
        let err = ApiError::from_body(404, json!({"detail": "missing"}));
        let json = serde_json::to_string(&err).unwrap();
        let parsed: ApiError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
