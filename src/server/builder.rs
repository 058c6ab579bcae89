//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::EntityRegistry;
use super::exposure::RestExposure;
use super::host::{AppState, ServerHost};
use crate::config::AppConfig;
use crate::core::error::ConfigError;
use crate::core::store::{EntityStore, OrderStore};
use crate::entities::{Customer, Order, Product};
use crate::links::RouteTemplateRegistry;
use crate::storage::InMemoryStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating the HTTP server
///
/// Any store left unset falls back to an empty [`InMemoryStore`].
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(AppConfig::from_env()?)
///     .with_custom_routes(admin_routes)
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    customers: Option<Arc<dyn EntityStore<Customer>>>,
    products: Option<Arc<dyn EntityStore<Product>>>,
    orders: Option<Arc<dyn OrderStore>>,
    entity_registry: EntityRegistry,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a builder serving customers, products and orders
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            customers: None,
            products: None,
            orders: None,
            entity_registry: EntityRegistry::with_default_entities(),
            custom_routes: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_customer_store(mut self, store: impl EntityStore<Customer> + 'static) -> Self {
        self.customers = Some(Arc::new(store));
        self
    }

    pub fn with_product_store(mut self, store: impl EntityStore<Product> + 'static) -> Self {
        self.products = Some(Arc::new(store));
        self
    }

    pub fn with_order_store(mut self, store: impl OrderStore + 'static) -> Self {
        self.orders = Some(Arc::new(store));
        self
    }

    /// Add custom routes to the server
    ///
    /// Use this for endpoints outside the entity resources (admin, metrics,
    /// webhooks). They are merged as-is and receive no hypermedia links.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    ///
    /// Fails if the configured base URL cannot prefix links.
    pub fn build_host(self) -> Result<ServerHost, ConfigError> {
        Ok(self.into_parts()?.0)
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router, ConfigError> {
        let (host, custom_routes) = self.into_parts()?;
        Ok(RestExposure::build_router(&host, custom_routes))
    }

    fn into_parts(self) -> Result<(ServerHost, Vec<Router>), ConfigError> {
        self.config.links.validate()?;

        let registry = Arc::new(RouteTemplateRegistry::new(&self.config.links));
        let state = AppState::new(
            self.customers
                .unwrap_or_else(|| Arc::new(InMemoryStore::<Customer>::new())),
            self.products
                .unwrap_or_else(|| Arc::new(InMemoryStore::<Product>::new())),
            self.orders
                .unwrap_or_else(|| Arc::new(InMemoryStore::<Order>::new())),
            registry,
        );

        let host = ServerHost::new(self.config, state, self.entity_registry);
        Ok((host, self.custom_routes))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self, addr: &str) -> Result<()> {
        serve_router(self.build()?, addr).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Bind `addr` and serve `app` until a shutdown signal arrives
pub async fn serve_router(app: Router, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
