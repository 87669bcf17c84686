//! The order handler — maps an HTTP-like request descriptor to a
//! response descriptor.
//!
//! One entry point, [`invoke`], dispatched strictly on the HTTP method
//! string. Every invocation acquires its own store from the provider and
//! releases it on the way out, success or failure.
//!
//! ## Example
//!
//! ```ignore
//! use orders_api::{invoke, ApiRequest, MemoryStoreProvider};
//!
//! let provider = MemoryStoreProvider::new();
//! let request = ApiRequest::new("POST")
//!     .with_body(r#"{"customerName":"A. Ivanov","product":"Widget","trackingNumber":"TN-1"}"#);
//! let response = invoke(&provider, &request).await;
//! assert_eq!(response.status, 201);
//! ```

mod error;
mod invoke;
mod request;

pub use error::HandlerError;
pub use invoke::invoke;
pub use request::{ApiRequest, ApiResponse};
