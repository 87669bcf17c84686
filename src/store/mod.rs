//! Storage seam for orders.
//!
//! An [`OrderStore`] is one invocation's unit of work: one connection,
//! used sequentially, released when the store is dropped. A
//! [`StoreProvider`] hands out a fresh store per invocation — the
//! Postgres provider opens a new connection each time, the in-memory
//! provider hands out clones sharing one map so tests can observe side
//! effects.

mod memory;
mod postgres;

use std::fmt;

use async_trait::async_trait;

use crate::order::{NewOrder, Order};

pub use memory::{InMemoryOrderStore, MemoryStoreProvider};
pub use postgres::{PostgresOrderStore, PostgresStoreProvider};

/// CRUD surface the order handler needs from a datastore.
///
/// Methods take `&mut self`: a store is a single sequential unit of work,
/// never shared between invocations.
#[async_trait]
pub trait OrderStore: Send {
    /// Look up the order whose tracking number exactly matches.
    async fn order_by_tracking(
        &mut self,
        tracking_number: &str,
    ) -> Result<Option<Order>, StoreError>;

    /// Every order, newest first (`created_at` descending).
    async fn list_orders(&mut self) -> Result<Vec<Order>, StoreError>;

    /// Insert a new order. The datastore assigns `id`, `created_at` and
    /// `updated_at` (both timestamps equal at insertion) and the write is
    /// committed before this returns.
    async fn insert_order(&mut self, order: NewOrder) -> Result<Order, StoreError>;

    /// Set the matching row's `status` and refresh `updated_at` to the
    /// current datastore-side time; commit. Returns `None` when no row
    /// matches `id`.
    async fn update_status(&mut self, id: i32, status: &str)
        -> Result<Option<Order>, StoreError>;
}

/// Produces a fresh [`OrderStore`] for each invocation.
#[async_trait]
pub trait StoreProvider: Send + Sync {
    type Store: OrderStore;

    async fn acquire(&self) -> Result<Self::Store, StoreError>;
}

/// Error type for store operations.
///
/// `Config` and `Database` messages are surfaced verbatim in the 500
/// response body.
#[derive(Debug)]
pub enum StoreError {
    /// Configuration could not be loaded.
    Config(String),
    /// Driver-level error (connect, query, commit).
    Database(String),
    /// In-memory store lock poisoned.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Config(message) => write!(f, "{}", message),
            StoreError::Database(message) => write!(f, "{}", message),
            StoreError::LockPoisoned(operation) => {
                write!(f, "order store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}
