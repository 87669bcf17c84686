use std::sync::Arc;

use orders_api::{serve, PostgresStoreProvider};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    setup_tracing();

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    serve(Arc::new(PostgresStoreProvider::new()), &addr).await
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}
