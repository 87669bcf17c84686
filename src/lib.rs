//! orders-api — a method-routed HTTP handler over a Postgres `orders`
//! table.
//!
//! One entry point, [`invoke`], turns an HTTP-like request descriptor
//! into a response descriptor: GET lists orders or looks one up by
//! tracking number, POST creates an order, PUT updates an order's
//! status, OPTIONS answers CORS pre-flight. Each invocation opens its
//! own datastore connection and closes it on the way out.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use orders_api::{serve, PostgresStoreProvider};
//!
//! // Reads DATABASE_URL and MAIN_DB_SCHEMA per request.
//! serve(Arc::new(PostgresStoreProvider::new()), "0.0.0.0:3000").await?;
//! ```
//!
//! For tests and local development, [`MemoryStoreProvider`] swaps the
//! database for a shared in-memory store.

mod config;
mod handler;
mod http;
mod order;
mod store;

pub use config::{Config, ConfigError};
pub use handler::{invoke, ApiRequest, ApiResponse, HandlerError};
pub use http::{router, serve};
pub use order::{NewOrder, Order};
pub use store::{
    InMemoryOrderStore, MemoryStoreProvider, OrderStore, PostgresOrderStore,
    PostgresStoreProvider, StoreError, StoreProvider,
};
