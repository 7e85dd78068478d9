//! REST failure taxonomy and backend error-body decoding.
//!
//! ERROR HANDLING
//! ==============
//! Screens render [`ApiError`] as an inline alert and never retry. Validation
//! failures keep the decoded body so forms can attach messages to fields.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde::Deserialize;

/// Generic fallback when the backend gives no usable message.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// Error body in the backend's (Django REST Framework) shape.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub non_field_errors: Vec<String>,
    /// Per-field message lists, keyed by field name.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl ErrorBody {
    /// First message attached to `field`.
    pub fn field_error(&self, field: &str) -> Option<String> {
        match self.fields.get(field)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => items.iter().find_map(|v| v.as_str().map(str::to_owned)),
            _ => None,
        }
    }

    /// The message to show when nothing more specific applies.
    pub fn summary(&self) -> String {
        if let Some(detail) = self.detail.as_deref().filter(|d| !d.is_empty()) {
            return detail.to_owned();
        }
        if let Some(first) = self.non_field_errors.first() {
            return first.clone();
        }
        self.fields
            .keys()
            .find_map(|field| self.field_error(field).map(|msg| format!("{field}: {msg}")))
            .unwrap_or_else(|| UNEXPECTED_ERROR.to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error. Please check your connection.")]
    Network(String),
    /// Non-success status.
    #[error("{}", .body.summary())]
    Rejected { status: u16, body: ErrorBody },
    /// A success response whose body did not decode.
    #[error("unexpected response from server: {0}")]
    Decode(String),
    /// Called where no browser is available (server rendering).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a rejection from a status code and raw response text.
    pub fn rejected(status: u16, raw_body: &str) -> Self {
        let body = serde_json::from_str::<ErrorBody>(raw_body).unwrap_or_default();
        ApiError::Rejected { status, body }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Field-level message from a rejection body.
    pub fn field_error(&self, field: &str) -> Option<String> {
        match self {
            ApiError::Rejected { body, .. } => body.field_error(field),
            _ => None,
        }
    }

    /// Whether the backend rejected the credentials the call carried.
    /// `403` means the credentials were fine but lack permission.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
