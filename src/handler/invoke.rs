//! Method dispatch and the four order operations.

use serde::Deserialize;

use crate::order::NewOrder;
use crate::store::{OrderStore, StoreProvider};

use super::error::HandlerError;
use super::request::{ApiRequest, ApiResponse};

const CREATE_REQUIRED: &[&str] = &["customerName", "product", "trackingNumber"];
const UPDATE_REQUIRED: &[&str] = &["id", "status"];
const DEFAULT_STATUS: &str = "pending";

enum Operation {
    Get,
    Create,
    UpdateStatus,
}

/// Handle one invocation.
///
/// Pre-flight and unsupported methods are answered without touching the
/// provider; the remaining methods acquire a store, run their operation,
/// and drop the store on every exit path.
pub async fn invoke<P: StoreProvider>(provider: &P, request: &ApiRequest) -> ApiResponse {
    if request.method == "OPTIONS" {
        return ApiResponse::preflight();
    }

    tracing::debug!(method = %request.method, "dispatching order request");
    match route(provider, request).await {
        Ok(response) => response,
        Err(e) => {
            if e.status_code() == 500 {
                tracing::error!(error = %e, method = %request.method, "order request failed");
            }
            ApiResponse::error(e.status_code(), &e.to_string())
        }
    }
}

async fn route<P: StoreProvider>(
    provider: &P,
    request: &ApiRequest,
) -> Result<ApiResponse, HandlerError> {
    // Method membership is checked before connecting: an unsupported
    // method must not open a store.
    let operation = match request.method.as_str() {
        "GET" => Operation::Get,
        "POST" => Operation::Create,
        "PUT" => Operation::UpdateStatus,
        _ => return Err(HandlerError::UnsupportedMethod),
    };

    let mut store = provider.acquire().await?;
    match operation {
        Operation::Get => get_orders(&mut store, request).await,
        Operation::Create => create_order(&mut store, request).await,
        Operation::UpdateStatus => update_status(&mut store, request).await,
    }
}

/// GET — single lookup when a `tracking_number` query parameter is
/// present, otherwise the full list, newest first.
async fn get_orders<S: OrderStore>(
    store: &mut S,
    request: &ApiRequest,
) -> Result<ApiResponse, HandlerError> {
    match request.query.get("tracking_number") {
        Some(tracking_number) => {
            let order = store
                .order_by_tracking(tracking_number)
                .await?
                .ok_or(HandlerError::NotFound)?;
            ApiResponse::json(200, &order)
        }
        None => {
            let orders = store.list_orders().await?;
            ApiResponse::json(200, &orders)
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateOrder {
    customer_name: Option<String>,
    product: Option<String>,
    tracking_number: Option<String>,
    status: Option<String>,
}

/// POST — insert a new order. The datastore assigns id and timestamps.
async fn create_order<S: OrderStore>(
    store: &mut S,
    request: &ApiRequest,
) -> Result<ApiResponse, HandlerError> {
    let input: CreateOrder = request.body_json()?;
    let (Some(customer_name), Some(product), Some(tracking_number)) = (
        present(input.customer_name),
        present(input.product),
        present(input.tracking_number),
    ) else {
        return Err(HandlerError::MissingFields(CREATE_REQUIRED));
    };

    let order = store
        .insert_order(NewOrder {
            tracking_number,
            customer_name,
            product,
            status: input.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        })
        .await?;
    ApiResponse::json(201, &order)
}

#[derive(Deserialize)]
struct StatusUpdate {
    id: Option<i32>,
    status: Option<String>,
}

/// PUT — set the matching row's status; the datastore refreshes
/// `updated_at`.
async fn update_status<S: OrderStore>(
    store: &mut S,
    request: &ApiRequest,
) -> Result<ApiResponse, HandlerError> {
    let input: StatusUpdate = request.body_json()?;
    // id 0 never names a real row; treat it like a missing field.
    let (Some(id), Some(status)) = (input.id.filter(|id| *id != 0), present(input.status))
    else {
        return Err(HandlerError::MissingFields(UPDATE_REQUIRED));
    };

    let order = store
        .update_status(id, &status)
        .await?
        .ok_or(HandlerError::NotFound)?;
    ApiResponse::json(200, &order)
}

/// A required string field counts as present only when non-empty.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
