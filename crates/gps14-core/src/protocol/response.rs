//! Response parsing utilities for the tracking protocol.

use serde_json::{Map, Value};

use crate::error::ClientError;

/// Fallback message when a failed request has no usable body.
pub const GENERIC_REQUEST_FAILURE: &str = "API request failed";

/// Raw server payload, discriminated by shape.
///
/// The server returns logically identical data either as a JSON array or as
/// an object keyed by identifier, so callers inspect the shape once here and
/// never touch untyped JSON elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    /// JSON array of loosely-typed elements
    Array(Vec<Value>),
    /// JSON object keyed by an identifier (usually the IMEI)
    Keyed(Map<String, Value>),
    /// Anything else: string, number, boolean, or null
    Scalar(Value),
}

impl From<Value> for RawResponse {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => RawResponse::Array(items),
            Value::Object(map) => RawResponse::Keyed(map),
            other => RawResponse::Scalar(other),
        }
    }
}

impl RawResponse {
    /// Number of elements in a collection response, 0 for scalars.
    pub fn item_count(&self) -> usize {
        match self {
            RawResponse::Array(items) => items.len(),
            RawResponse::Keyed(map) => map.len(),
            RawResponse::Scalar(_) => 0,
        }
    }

    /// Get as a string scalar
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawResponse::Scalar(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Convert back into plain JSON
    pub fn into_value(self) -> Value {
        match self {
            RawResponse::Array(items) => Value::Array(items),
            RawResponse::Keyed(map) => Value::Object(map),
            RawResponse::Scalar(v) => v,
        }
    }

    /// Convert to pretty string
    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(&self.clone().into_value()).unwrap_or_default()
    }
}

/// Parse a command response body.
///
/// Bodies that are not JSON are kept as a string scalar rather than
/// rejected; the normalizers decide what they can use.
pub fn parse_command_body(body: &str) -> RawResponse {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => RawResponse::from(value),
        Err(_) => RawResponse::Scalar(Value::String(body.to_string())),
    }
}

/// Extract the session token from a login response body.
///
/// A successful login answers with a bare token, either as plain text or as
/// a JSON string. Any other JSON value is the server refusing the login.
pub fn parse_login_body(body: &str) -> Result<String, ClientError> {
    let token = match serde_json::from_str::<Value>(body) {
        Ok(Value::String(s)) => s,
        Ok(other) => {
            return Err(ClientError::Auth(format!(
                "Unexpected login response: {}",
                other
            )))
        }
        Err(_) => body.to_string(),
    };

    let token = token.trim();
    if token.is_empty() {
        return Err(ClientError::Auth("Empty login response".to_string()));
    }

    Ok(token.to_string())
}

/// Message carried by a failed request: the server body when present.
pub fn error_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        GENERIC_REQUEST_FAILURE.to_string()
    } else {
        trimmed.to_string()
    }
}
