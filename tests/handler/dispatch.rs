//! Method dispatch: pre-flight, unsupported methods, headers, faults.

use orders_api::{invoke, ApiRequest, MemoryStoreProvider};

use crate::support::{body, CountingProvider};

#[tokio::test]
async fn options_returns_preflight_without_touching_the_store() {
    let provider = CountingProvider::new();

    let response = invoke(&provider, &ApiRequest::new("OPTIONS")).await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "");
    assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
    assert_eq!(
        response.header("Access-Control-Allow-Methods"),
        Some("GET, POST, PUT, OPTIONS")
    );
    assert_eq!(
        response.header("Access-Control-Allow-Headers"),
        Some("Content-Type")
    );
    assert_eq!(provider.acquired(), 0);
}

#[tokio::test]
async fn unsupported_method_returns_405_without_touching_the_store() {
    let provider = CountingProvider::new();

    let response = invoke(&provider, &ApiRequest::new("DELETE")).await;

    assert_eq!(response.status, 405);
    assert_eq!(body(&response)["error"], "Метод не поддерживается");
    assert_eq!(provider.acquired(), 0);
}

#[tokio::test]
async fn supported_methods_acquire_one_store_each() {
    let provider = CountingProvider::new();

    invoke(&provider, &ApiRequest::new("GET")).await;
    invoke(&provider, &ApiRequest::new("GET")).await;

    assert_eq!(provider.acquired(), 2);
}

#[tokio::test]
async fn responses_carry_content_type_and_allow_origin() {
    let provider = MemoryStoreProvider::new();

    let response = invoke(&provider, &ApiRequest::new("GET")).await;

    assert_eq!(response.header("Content-Type"), Some("application/json"));
    assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
}

#[tokio::test]
async fn malformed_body_returns_500_with_the_parser_message() {
    let provider = MemoryStoreProvider::new();

    let request = ApiRequest::new("POST").with_body("{not json");
    let response = invoke(&provider, &request).await;

    assert_eq!(response.status, 500);
    let error = body(&response)["error"].as_str().unwrap().to_string();
    assert!(!error.is_empty());
}
