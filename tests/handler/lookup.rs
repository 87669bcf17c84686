//! GET — listing and tracking-number lookup.

use std::time::Duration;

use orders_api::{invoke, ApiRequest, MemoryStoreProvider};

use crate::support::{body, seed};

#[tokio::test]
async fn lookup_returns_exactly_the_matching_order() {
    let provider = MemoryStoreProvider::new();
    seed(&provider, "TRK-1", "pending").await;
    let wanted = seed(&provider, "TRK-2", "shipped").await;

    let request = ApiRequest::new("GET").with_query("tracking_number", "TRK-2");
    let response = invoke(&provider, &request).await;

    assert_eq!(response.status, 200);
    let order = body(&response);
    assert_eq!(order["id"], wanted.id);
    assert_eq!(order["trackingNumber"], "TRK-2");
    assert_eq!(order["status"], "shipped");
}

#[tokio::test]
async fn lookup_unknown_tracking_number_returns_404() {
    let provider = MemoryStoreProvider::new();
    seed(&provider, "TRK-1", "pending").await;

    let request = ApiRequest::new("GET").with_query("tracking_number", "TRK-404");
    let response = invoke(&provider, &request).await;

    assert_eq!(response.status, 404);
    assert_eq!(body(&response)["error"], "Заказ не найден");
}

#[tokio::test]
async fn list_returns_newest_first() {
    let provider = MemoryStoreProvider::new();
    for tracking in ["TRK-1", "TRK-2", "TRK-3"] {
        seed(&provider, tracking, "pending").await;
        tokio::time::sleep(Duration::from_millis(2)).await;
    }

    let response = invoke(&provider, &ApiRequest::new("GET")).await;

    assert_eq!(response.status, 200);
    let orders = body(&response);
    let trackings: Vec<&str> = orders
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["trackingNumber"].as_str().unwrap())
        .collect();
    assert_eq!(trackings, vec!["TRK-3", "TRK-2", "TRK-1"]);
}

#[tokio::test]
async fn empty_table_lists_as_empty_array() {
    let provider = MemoryStoreProvider::new();

    let response = invoke(&provider, &ApiRequest::new("GET")).await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "[]");
}
