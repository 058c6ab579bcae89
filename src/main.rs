//! hateoas-rs server binary
//!
//! Reads the YAML file named by `HATEOAS_CONFIG` (defaults otherwise), seeds
//! the in-memory stores and serves the API.

use anyhow::Result;
use hateoas::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;
    let address = config.server.address();
    let seed = config.seed;

    let host = ServerBuilder::new().with_config(config).build_host()?;
    if seed {
        load_static_data(
            host.state.customers.as_ref(),
            host.state.products.as_ref(),
            host.state.orders.as_ref(),
        )
        .await?;
    }

    for (kind, operation, template) in host.state.registry.list_routes() {
        tracing::debug!(%kind, %operation, path = template.path(), "route registered");
    }

    let app = RestExposure::build_router(&host, Vec::new());
    serve_router(app, &address).await
}
