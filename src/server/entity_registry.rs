//! Entity registry for collecting entity descriptors and building their routes

use crate::core::entity::EntityKind;
use crate::links::RouteTemplateRegistry;
use crate::server::handlers::{CustomerDescriptor, OrderDescriptor, ProductDescriptor};
use crate::server::host::AppState;
use axum::Router;
use std::collections::BTreeMap;

/// Trait that describes how to build routes for an entity
///
/// Descriptors register their handlers on the paths of the route table, never
/// on literal strings, so dispatch and generated links always agree.
pub trait EntityDescriptor: Send + Sync {
    /// The entity kind served
    fn kind(&self) -> EntityKind;

    /// Build the routes for this entity
    fn build_routes(&self, registry: &RouteTemplateRegistry) -> Router<AppState>;
}

/// Registry for all entities served by the application
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<EntityKind, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Registry serving customers, products and orders
    pub fn with_default_entities() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CustomerDescriptor));
        registry.register(Box::new(ProductDescriptor));
        registry.register(Box::new(OrderDescriptor));
        registry
    }

    /// Register an entity descriptor, replacing any previous one for its kind
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        self.descriptors.insert(descriptor.kind(), descriptor);
    }

    /// Build a router with all registered entity routes
    pub fn build_routes(&self, registry: &RouteTemplateRegistry) -> Router<AppState> {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes(registry))
            })
    }

    /// Get all registered entity kinds
    pub fn entity_kinds(&self) -> Vec<EntityKind> {
        self.descriptors.keys().copied().collect()
    }
}
