//! HAL envelopes wrapping entities and collections with their links
//!
//! Single entity:
//!
//! ```text
//! { "id": 1, "name": "Ironman", "_links": { "self": { "href": "/customers/1" }, ... } }
//! ```
//!
//! Collection:
//!
//! ```text
//! { "_embedded": { "customerList": [ <entity model>, ... ] },
//!   "_links": { "self": { "href": "/customers" } } }
//! ```
//!
//! An empty collection omits `_embedded` and keeps its `self` link.

use crate::core::entity::{Entity, EntityKind};
use crate::core::link::LinkSet;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// One entity with its links
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityModel<T> {
    #[serde(flatten)]
    content: T,

    #[serde(rename = "_links")]
    links: LinkSet,
}

impl<T> EntityModel<T> {
    pub fn new(content: T, links: LinkSet) -> Self {
        Self { content, links }
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn links(&self) -> &LinkSet {
        &self.links
    }
}

/// A named collection of entity models plus collection-level links
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionModel<T> {
    kind: EntityKind,
    items: Vec<EntityModel<T>>,
    links: LinkSet,
}

impl<T: Entity> CollectionModel<T> {
    /// The embedded array is named after `T`'s kind (e.g. `orderList`)
    pub fn new(items: Vec<EntityModel<T>>, links: LinkSet) -> Self {
        Self {
            kind: T::kind(),
            items,
            links,
        }
    }
}

impl<T> CollectionModel<T> {
    pub fn items(&self) -> &[EntityModel<T>] {
        &self.items
    }

    pub fn links(&self) -> &LinkSet {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

struct Embedded<'a, T> {
    name: String,
    items: &'a [EntityModel<T>],
}

impl<T: Serialize> Serialize for Embedded<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, self.items)?;
        map.end()
    }
}

impl<T: Serialize> Serialize for CollectionModel<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if !self.items.is_empty() {
            let embedded = Embedded {
                name: self.kind.collection_name(),
                items: &self.items,
            };
            map.serialize_entry("_embedded", &embedded)?;
        }
        map.serialize_entry("_links", &self.links)?;
        map.end()
    }
}
