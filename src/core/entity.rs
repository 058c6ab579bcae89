//! Entity trait and the closed set of resource kinds exposed by the API

use crate::core::error::LinkError;
use crate::core::pluralize::Pluralizer;
use serde::Serialize;
use std::fmt;

/// Store-assigned identity of a persisted entity
pub type EntityId = u64;

/// Every resource type the API knows about.
///
/// The set is closed: asking the route registry about a kind that does not
/// exist cannot compile, so an unknown entity type is never a runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Customer,
    Product,
    Order,
}

impl EntityKind {
    /// All kinds, in declaration order
    pub const ALL: [EntityKind; 3] = [EntityKind::Customer, EntityKind::Product, EntityKind::Order];

    /// The singular resource name (e.g., "customer")
    pub fn singular(self) -> &'static str {
        match self {
            EntityKind::Customer => "customer",
            EntityKind::Product => "product",
            EntityKind::Order => "order",
        }
    }

    /// The plural resource name used as the collection path segment (e.g., "customers")
    pub fn plural(self) -> String {
        Pluralizer::pluralize(self.singular())
    }

    /// Name of the embedded array in a collection envelope (e.g., "customerList")
    pub fn collection_name(self) -> String {
        format!("{}List", self.singular())
    }

    pub(crate) fn index(self) -> usize {
        match self {
            EntityKind::Customer => 0,
            EntityKind::Product => 1,
            EntityKind::Order => 2,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// Base trait for all entities in the system.
///
/// Entities start out transient (`id() == None`) and receive their identity
/// the first time a store saves them. Once assigned, the id never changes.
pub trait Entity: Clone + Serialize + Send + Sync + 'static {
    /// The resource kind this entity belongs to
    fn kind() -> EntityKind;

    /// Get the identity of this entity, if it has been persisted
    fn id(&self) -> Option<EntityId>;

    /// Assign the store-generated identity
    ///
    /// Stores call this exactly once, on first save.
    fn assign_id(&mut self, id: EntityId);

    /// Get the identity or fail with [`LinkError::UnresolvedIdentity`]
    fn require_id(&self) -> Result<EntityId, LinkError> {
        self.id().ok_or(LinkError::UnresolvedIdentity {
            entity_type: Self::kind(),
        })
    }
}
