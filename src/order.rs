//! The order record and its wire shape.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A customer's purchase record, tracked through fulfillment via its
/// free-form `status` string.
///
/// Serializes with camelCase field names; timestamps render as ISO-8601
/// strings or `null`. `id` and both timestamps are assigned by the
/// datastore, never by the handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    /// Caller-supplied external identifier, used as an alternate lookup key.
    pub tracking_number: String,
    pub customer_name: String,
    pub product: String,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
    /// Equals `created_at` until the first status update.
    pub updated_at: Option<NaiveDateTime>,
}

/// A validated insert payload. `status` is already defaulted by the time
/// one of these is built.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub tracking_number: String,
    pub customer_name: String,
    pub product: String,
    pub status: String,
}
