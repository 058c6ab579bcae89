//! Store traits for entity persistence
//!
//! The API only depends on these traits; the storage mechanism behind them is
//! opaque. Each call is expected to be individually consistent, no operation
//! spans more than one call.

use crate::core::entity::{Entity, EntityId};
use crate::entities::Order;
use anyhow::Result;
use async_trait::async_trait;

/// Persistence for one entity type
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    /// List all entities, ordered by id
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Get an entity by id
    async fn find_by_id(&self, id: EntityId) -> Result<Option<T>>;

    /// Persist an entity
    ///
    /// A transient entity receives a fresh id. An entity that already has an
    /// id replaces the stored value under that id.
    async fn save(&self, entity: T) -> Result<T>;

    /// Persist several entities, returning them in input order
    async fn save_all(&self, entities: Vec<T>) -> Result<Vec<T>> {
        let mut saved = Vec::with_capacity(entities.len());
        for entity in entities {
            saved.push(self.save(entity).await?);
        }
        Ok(saved)
    }
}

/// Order persistence with lookups by the referenced customer or product
#[async_trait]
pub trait OrderStore: EntityStore<Order> {
    /// Orders placed by the given customer
    async fn find_by_customer(&self, customer_id: EntityId) -> Result<Vec<Order>>;

    /// Orders for the given product
    async fn find_by_product(&self, product_id: EntityId) -> Result<Vec<Order>>;
}
