//! PUT — updating an order's status.

use std::time::Duration;

use orders_api::{invoke, ApiRequest, MemoryStoreProvider};
use serde_json::json;

use crate::support::{body, seed};

fn update_request(payload: serde_json::Value) -> ApiRequest {
    ApiRequest::new("PUT").with_body(payload.to_string())
}

#[tokio::test]
async fn update_existing_order_refreshes_status_and_updated_at() {
    let provider = MemoryStoreProvider::new();
    let created = seed(&provider, "TRK-1", "pending").await;

    tokio::time::sleep(Duration::from_millis(2)).await;
    let response = invoke(
        &provider,
        &update_request(json!({ "id": created.id, "status": "shipped" })),
    )
    .await;

    assert_eq!(response.status, 200);
    let order: orders_api::Order = serde_json::from_str(&response.body).unwrap();
    assert_eq!(order.status, "shipped");
    assert_eq!(order.created_at, created.created_at);
    assert!(order.updated_at > created.updated_at);
}

#[tokio::test]
async fn update_unknown_id_returns_404_and_mutates_nothing() {
    let provider = MemoryStoreProvider::new();
    seed(&provider, "TRK-1", "pending").await;

    let response = invoke(
        &provider,
        &update_request(json!({ "id": 999, "status": "shipped" })),
    )
    .await;

    assert_eq!(response.status, 404);
    assert_eq!(body(&response)["error"], "Заказ не найден");

    let lookup = ApiRequest::new("GET").with_query("tracking_number", "TRK-1");
    let untouched = invoke(&provider, &lookup).await;
    assert_eq!(body(&untouched)["status"], "pending");
}

#[tokio::test]
async fn update_missing_fields_returns_400() {
    let provider = MemoryStoreProvider::new();
    seed(&provider, "TRK-1", "pending").await;

    let incomplete = [
        json!({ "status": "shipped" }),
        json!({ "id": 1 }),
        json!({ "id": 1, "status": "" }),
        json!({ "id": 0, "status": "shipped" }),
    ];

    for payload in incomplete {
        let response = invoke(&provider, &update_request(payload)).await;
        assert_eq!(response.status, 400);
        assert_eq!(body(&response)["error"], "Необходимы поля: id, status");
    }

    let lookup = ApiRequest::new("GET").with_query("tracking_number", "TRK-1");
    let untouched = invoke(&provider, &lookup).await;
    assert_eq!(body(&untouched)["status"], "pending");
}

#[tokio::test]
async fn status_is_free_form() {
    let provider = MemoryStoreProvider::new();
    let created = seed(&provider, "TRK-1", "pending").await;

    let response = invoke(
        &provider,
        &update_request(json!({ "id": created.id, "status": "lost in transit" })),
    )
    .await;

    assert_eq!(response.status, 200);
    assert_eq!(body(&response)["status"], "lost in transit");
}
