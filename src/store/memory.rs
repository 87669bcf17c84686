//! In-memory order store for tests and local development.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::order::{NewOrder, Order};

use super::{OrderStore, StoreError, StoreProvider};

#[derive(Default)]
struct Inner {
    orders: Vec<Order>,
    next_id: i32,
}

/// In-memory order store backed by a shared `Vec`.
///
/// Ids are assigned from 1; both timestamps are stamped with the current
/// UTC time at insertion. Clone-friendly via `Arc` — clones share storage,
/// so a test can hand one clone to the handler and inspect another.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryOrderStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn order_by_tracking(
        &mut self,
        tracking_number: &str,
    ) -> Result<Option<Order>, StoreError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| StoreError::LockPoisoned("order_by_tracking"))?;
        // First match in insertion order — duplicate tracking numbers are
        // accepted, the earliest row wins.
        Ok(inner
            .orders
            .iter()
            .find(|o| o.tracking_number == tracking_number)
            .cloned())
    }

    async fn list_orders(&mut self) -> Result<Vec<Order>, StoreError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| StoreError::LockPoisoned("list_orders"))?;
        let mut orders = inner.orders.clone();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    async fn insert_order(&mut self, order: NewOrder) -> Result<Order, StoreError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| StoreError::LockPoisoned("insert_order"))?;
        let now = Utc::now().naive_utc();
        inner.next_id += 1;
        let order = Order {
            id: inner.next_id,
            tracking_number: order.tracking_number,
            customer_name: order.customer_name,
            product: order.product,
            status: order.status,
            created_at: Some(now),
            updated_at: Some(now),
        };
        inner.orders.push(order.clone());
        Ok(order)
    }

    async fn update_status(
        &mut self,
        id: i32,
        status: &str,
    ) -> Result<Option<Order>, StoreError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| StoreError::LockPoisoned("update_status"))?;
        let now = Utc::now().naive_utc();
        match inner.orders.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                order.status = status.to_string();
                order.updated_at = Some(now);
                Ok(Some(order.clone()))
            }
            None => Ok(None),
        }
    }
}

/// Hands out clones of one shared [`InMemoryOrderStore`].
#[derive(Clone, Default)]
pub struct MemoryStoreProvider {
    store: InMemoryOrderStore,
}

impl MemoryStoreProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clone of the underlying store, for seeding and inspection.
    pub fn store(&self) -> InMemoryOrderStore {
        self.store.clone()
    }
}

#[async_trait]
impl StoreProvider for MemoryStoreProvider {
    type Store = InMemoryOrderStore;

    async fn acquire(&self) -> Result<InMemoryOrderStore, StoreError> {
        Ok(self.store.clone())
    }
}
