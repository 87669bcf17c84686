//! Postgres-backed order store.
//!
//! One connection per invocation, opened from a freshly-read config and
//! closed when the store drops. Writes run inside a transaction: commit
//! on success, and an error path drops the transaction un-committed,
//! which rolls it back.

use async_trait::async_trait;
use tokio_postgres::{Client, NoTls, Row};

use crate::config::Config;
use crate::order::{NewOrder, Order};

use super::{OrderStore, StoreError, StoreProvider};

const SELECT_BY_TRACKING: &str =
    "SELECT id, tracking_number, customer_name, product, status, created_at, updated_at \
     FROM orders WHERE tracking_number = $1";

const SELECT_ALL: &str =
    "SELECT id, tracking_number, customer_name, product, status, created_at, updated_at \
     FROM orders ORDER BY created_at DESC";

const INSERT: &str =
    "INSERT INTO orders (tracking_number, customer_name, product, status) \
     VALUES ($1, $2, $3, $4) \
     RETURNING id, tracking_number, customer_name, product, status, created_at, updated_at";

const UPDATE_STATUS: &str =
    "UPDATE orders SET status = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2 \
     RETURNING id, tracking_number, customer_name, product, status, created_at, updated_at";

/// An open connection to the orders database, scoped to one invocation.
pub struct PostgresOrderStore {
    client: Client,
    driver: tokio::task::JoinHandle<()>,
}

impl PostgresOrderStore {
    /// Connect with the configured schema on the `search_path`.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let mut pg = config.database_url.parse::<tokio_postgres::Config>()?;
        pg.options(&format!("-c search_path={}", config.schema));

        let (client, connection) = pg.connect(NoTls).await?;
        let driver = tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "postgres connection terminated");
            }
        });

        Ok(Self { client, driver })
    }
}

impl Drop for PostgresOrderStore {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn order_by_tracking(
        &mut self,
        tracking_number: &str,
    ) -> Result<Option<Order>, StoreError> {
        let row = self
            .client
            .query_opt(SELECT_BY_TRACKING, &[&tracking_number])
            .await?;
        Ok(row.as_ref().map(row_to_order))
    }

    async fn list_orders(&mut self) -> Result<Vec<Order>, StoreError> {
        let rows = self.client.query(SELECT_ALL, &[]).await?;
        Ok(rows.iter().map(row_to_order).collect())
    }

    async fn insert_order(&mut self, order: NewOrder) -> Result<Order, StoreError> {
        let tx = self.client.transaction().await?;
        let row = tx
            .query_one(
                INSERT,
                &[
                    &order.tracking_number,
                    &order.customer_name,
                    &order.product,
                    &order.status,
                ],
            )
            .await?;
        tx.commit().await?;
        Ok(row_to_order(&row))
    }

    async fn update_status(
        &mut self,
        id: i32,
        status: &str,
    ) -> Result<Option<Order>, StoreError> {
        let tx = self.client.transaction().await?;
        let row = tx.query_opt(UPDATE_STATUS, &[&status, &id]).await?;
        tx.commit().await?;
        Ok(row.as_ref().map(row_to_order))
    }
}

fn row_to_order(row: &Row) -> Order {
    Order {
        id: row.get("id"),
        tracking_number: row.get("tracking_number"),
        customer_name: row.get("customer_name"),
        product: row.get("product"),
        status: row.get("status"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

impl From<tokio_postgres::Error> for StoreError {
    fn from(err: tokio_postgres::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

/// Opens a new connection per invocation.
///
/// Configuration is re-read from the environment on every acquisition,
/// never cached across invocations.
#[derive(Debug, Clone, Default)]
pub struct PostgresStoreProvider;

impl PostgresStoreProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StoreProvider for PostgresStoreProvider {
    type Store = PostgresOrderStore;

    async fn acquire(&self) -> Result<PostgresOrderStore, StoreError> {
        let config = Config::from_env().map_err(|e| StoreError::Config(e.to_string()))?;
        PostgresOrderStore::connect(&config).await
    }
}
