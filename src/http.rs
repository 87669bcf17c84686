//! HTTP transport — adapts real HTTP requests to the handler's
//! request/response descriptors. Uses axum for routing.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use orders_api::{serve, PostgresStoreProvider};
//!
//! serve(Arc::new(PostgresStoreProvider::new()), "0.0.0.0:3000").await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{Method, Response, StatusCode};
use axum::response::IntoResponse;
use axum::routing::any;
use axum::Router;

use crate::handler::{invoke, ApiRequest, ApiResponse};
use crate::store::StoreProvider;

/// Build an axum `Router` that feeds every method on `/` to the handler.
pub fn router<P: StoreProvider + 'static>(provider: Arc<P>) -> Router {
    Router::new()
        .route("/", any(request_handler::<P>))
        .with_state(provider)
}

/// Serve the handler over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<P: StoreProvider + 'static>(
    provider: Arc<P>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(provider);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "orders api listening");
    axum::serve(listener, app).await
}

async fn request_handler<P: StoreProvider + 'static>(
    State(provider): State<Arc<P>>,
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> axum::response::Response {
    let request = ApiRequest {
        method: method.as_str().to_string(),
        query,
        body: if body.is_empty() { None } else { Some(body) },
    };
    let response = invoke(provider.as_ref(), &request).await;
    into_axum(response)
}

fn into_axum(response: ApiResponse) -> axum::response::Response {
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = Response::builder().status(status);
    for (name, value) in &response.headers {
        builder = builder.header(*name, value);
    }
    match builder.body(Body::from(response.body)) {
        Ok(response) => response,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
