//! Server host and shared application state
//!
//! `AppState` is what handlers see: the stores, the route table and one link
//! builder per entity kind, all constructed explicitly and shared for the
//! lifetime of the process. `ServerHost` adds what the REST exposure needs to
//! build the router.

use crate::config::{AppConfig, LinksConfig};
use crate::core::store::{EntityStore, OrderStore};
use crate::entities::{Customer, Order, Product};
use crate::links::{CustomerLinks, OrderLinks, ProductLinks, RouteTemplateRegistry};
use crate::server::entity_registry::EntityRegistry;
use crate::storage::InMemoryStore;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn EntityStore<Customer>>,
    pub products: Arc<dyn EntityStore<Product>>,
    pub orders: Arc<dyn OrderStore>,

    /// Route table used both for dispatch and for link generation
    pub registry: Arc<RouteTemplateRegistry>,

    pub customer_links: CustomerLinks,
    pub product_links: ProductLinks,
    pub order_links: OrderLinks,
}

impl AppState {
    /// Wire stores and link builders around one route table
    pub fn new(
        customers: Arc<dyn EntityStore<Customer>>,
        products: Arc<dyn EntityStore<Product>>,
        orders: Arc<dyn OrderStore>,
        registry: Arc<RouteTemplateRegistry>,
    ) -> Self {
        Self {
            customers,
            products,
            orders,
            customer_links: CustomerLinks::new(registry.clone()),
            product_links: ProductLinks::new(registry.clone()),
            order_links: OrderLinks::new(registry.clone()),
            registry,
        }
    }

    /// State backed by fresh in-memory stores
    pub fn in_memory(links: &LinksConfig) -> Self {
        Self::new(
            Arc::new(InMemoryStore::<Customer>::new()),
            Arc::new(InMemoryStore::<Product>::new()),
            Arc::new(InMemoryStore::<Order>::new()),
            Arc::new(RouteTemplateRegistry::new(links)),
        )
    }
}

/// Host context containing all server state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerBuilder::new().with_config(config).build_host()?;
/// seed::load_static_data(
///     host.state.customers.as_ref(),
///     host.state.products.as_ref(),
///     host.state.orders.as_ref(),
/// )
/// .await?;
/// let app = RestExposure::build_router(&host, Vec::new());
/// ```
pub struct ServerHost {
    pub config: AppConfig,
    pub state: AppState,
    pub entity_registry: EntityRegistry,
}

impl ServerHost {
    pub fn new(config: AppConfig, state: AppState, entity_registry: EntityRegistry) -> Self {
        Self {
            config,
            state,
            entity_registry,
        }
    }
}
