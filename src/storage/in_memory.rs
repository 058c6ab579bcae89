//! In-memory implementation of the entity stores

use crate::core::entity::{Entity, EntityId};
use crate::core::store::{EntityStore, OrderStore};
use crate::entities::Order;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory store for one entity type
///
/// Ids are assigned from a per-store sequence starting at 1. Cloning the store
/// shares the underlying data. Uses RwLock for thread-safe access.
pub struct InMemoryStore<T> {
    entities: Arc<RwLock<BTreeMap<EntityId, T>>>,
    sequence: Arc<AtomicU64>,
}

impl<T> InMemoryStore<T> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(BTreeMap::new())),
            sequence: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl<T> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            entities: self.entities.clone(),
            sequence: self.sequence.clone(),
        }
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryStore<T> {
    fn filter(&self, predicate: impl Fn(&T) -> bool) -> Result<Vec<T>> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entities
            .values()
            .filter(|entity| predicate(*entity))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl<T: Entity> EntityStore<T> for InMemoryStore<T> {
    async fn find_all(&self) -> Result<Vec<T>> {
        self.filter(|_| true)
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<T>> {
        let entities = self
            .entities
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(entities.get(&id).cloned())
    }

    async fn save(&self, mut entity: T) -> Result<T> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = match entity.id() {
            Some(id) => {
                // Keep the sequence ahead of ids assigned elsewhere
                let next = id
                    .checked_add(1)
                    .ok_or_else(|| anyhow!("{} id {} is outside the id range", T::kind(), id))?;
                self.sequence.fetch_max(next, Ordering::SeqCst);
                id
            }
            None => {
                let id = self
                    .sequence
                    .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
                    .map_err(|_| anyhow!("{} id sequence is exhausted", T::kind()))?;
                entity.assign_id(id);
                id
            }
        };

        tracing::debug!(entity_type = %T::kind(), id, "saved entity");
        entities.insert(id, entity.clone());

        Ok(entity)
    }
}

#[async_trait]
impl OrderStore for InMemoryStore<Order> {
    async fn find_by_customer(&self, customer_id: EntityId) -> Result<Vec<Order>> {
        self.filter(|order| order.customer().id() == Some(customer_id))
    }

    async fn find_by_product(&self, product_id: EntityId) -> Result<Vec<Order>> {
        self.filter(|order| order.product().id() == Some(product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Customer, Product};

    async fn saved_customer(store: &InMemoryStore<Customer>, name: &str) -> Customer {
        store.save(Customer::new(name.to_string())).await.unwrap()
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let store = InMemoryStore::new();

        let ironman = saved_customer(&store, "Ironman").await;
        let thor = saved_customer(&store, "Thor").await;

        assert_eq!(ironman.id(), Some(1));
        assert_eq!(thor.id(), Some(2));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = InMemoryStore::new();
        let ironman = saved_customer(&store, "Ironman").await;

        let found = store.find_by_id(1).await.unwrap();
        assert_eq!(found, Some(ironman));

        assert!(store.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let store = InMemoryStore::new();
        let saved = store
            .save_all(vec![
                Customer::new("Ironman".to_string()),
                Customer::new("Thor".to_string()),
                Customer::new("Thanos".to_string()),
            ])
            .await
            .unwrap();

        let names: Vec<_> = saved.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ironman", "Thor", "Thanos"]);

        let all = store.find_all().await.unwrap();
        assert_eq!(all, saved);
    }

    #[tokio::test]
    async fn test_save_with_id_replaces() {
        let store = InMemoryStore::new();
        let mut ironman = saved_customer(&store, "Ironman").await;

        ironman.name = "Tony Stark".to_string();
        let updated = store.save(ironman).await.unwrap();

        assert_eq!(updated.id(), Some(1));
        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Tony Stark");
    }

    #[tokio::test]
    async fn test_sequence_skips_explicit_ids() {
        let store = InMemoryStore::new();
        let mut explicit = Customer::new("Loki".to_string());
        explicit.assign_id(10);
        store.save(explicit).await.unwrap();

        let next = saved_customer(&store, "Thor").await;
        assert_eq!(next.id(), Some(11));
    }

    #[tokio::test]
    async fn test_max_explicit_id_is_rejected() {
        let store = InMemoryStore::new();
        let mut explicit = Customer::new("Loki".to_string());
        explicit.assign_id(u64::MAX);

        assert!(store.save(explicit).await.is_err());
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_exhausted_sequence_never_overwrites() {
        let store = InMemoryStore::new();
        let mut last = Customer::new("Loki".to_string());
        last.assign_id(u64::MAX - 1);
        store.save(last).await.unwrap();

        // The only id left would be u64::MAX, which can never be followed
        let err = store
            .save(Customer::new("Thor".to_string()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("exhausted"));

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Loki");
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let store = InMemoryStore::new();
        let clone = store.clone();
        saved_customer(&store, "Ironman").await;

        assert_eq!(clone.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_orders_by_reference() {
        let customers = InMemoryStore::new();
        let products = InMemoryStore::new();
        let orders = InMemoryStore::<Order>::new();

        let ironman = saved_customer(&customers, "Ironman").await;
        let thor = saved_customer(&customers, "Thor").await;
        let iphone = products
            .save(Product::new("iPhone".to_string(), 80000))
            .await
            .unwrap();
        let macbook = products
            .save(Product::new("MacBook Pro".to_string(), 200000))
            .await
            .unwrap();

        orders
            .save_all(vec![
                Order::new(ironman.clone(), iphone.clone(), 2).unwrap(),
                Order::new(ironman.clone(), macbook.clone(), 1).unwrap(),
                Order::new(thor.clone(), iphone.clone(), 1).unwrap(),
            ])
            .await
            .unwrap();

        assert_eq!(orders.find_by_customer(1).await.unwrap().len(), 2);
        assert_eq!(orders.find_by_customer(2).await.unwrap().len(), 1);
        assert_eq!(orders.find_by_product(1).await.unwrap().len(), 2);
        assert_eq!(orders.find_by_product(2).await.unwrap().len(), 1);
        assert!(orders.find_by_product(3).await.unwrap().is_empty());
    }
}
