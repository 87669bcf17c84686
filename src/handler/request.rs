//! Request / response descriptors.
//!
//! The handler is transport-agnostic: any HTTP-invoking runtime that can
//! build an [`ApiRequest`] and write back an [`ApiResponse`] can host it.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use super::error::HandlerError;

/// Methods advertised in the pre-flight response.
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, OPTIONS";

/// An inbound request: method, query parameters, raw body text.
///
/// The body stays unparsed here — decoding happens inside the handled
/// region, so malformed JSON maps to a 500 rather than a 400.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: String,
    pub query: HashMap<String, String>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// A request with the given method and no query or body.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            query: HashMap::new(),
            body: None,
        }
    }

    /// Add a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Set the raw body text.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Decode the body as JSON. A missing body decodes as `{}`, so absent
    /// fields surface as validation errors rather than parse faults.
    pub fn body_json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(self.body.as_deref().unwrap_or("{}"))
    }
}

/// An outbound response: status code, headers, body text.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl ApiResponse {
    /// The pre-flight response: 200, empty body, CORS headers advertising
    /// the allowed methods and request headers.
    pub fn preflight() -> Self {
        Self {
            status: 200,
            headers: vec![
                ("Access-Control-Allow-Origin", "*".to_string()),
                ("Access-Control-Allow-Methods", ALLOWED_METHODS.to_string()),
                ("Access-Control-Allow-Headers", "Content-Type".to_string()),
            ],
            body: String::new(),
        }
    }

    /// A JSON response with the standard content-type and allow-origin
    /// headers.
    pub fn json<T: Serialize + ?Sized>(status: u16, body: &T) -> Result<Self, HandlerError> {
        Ok(Self {
            status,
            headers: Self::json_headers(),
            body: serde_json::to_string(body)?,
        })
    }

    /// An error response with body `{"error": "<message>"}`.
    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            headers: Self::json_headers(),
            body: json!({ "error": message }).to_string(),
        }
    }

    fn json_headers() -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", "application/json".to_string()),
            ("Access-Control-Allow-Origin", "*".to_string()),
        ]
    }

    /// Look up a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}
