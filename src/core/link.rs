//! Hypermedia links and ordered link sets
//!
//! A [`Link`] pairs a relation name with a target URL. A [`LinkSet`] is the
//! ordered collection of links attached to one representation; it serializes
//! as the HAL `_links` object, preserving insertion order.

use crate::core::error::LinkError;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Relation names used by the API
///
/// `self` and `collection` are IANA registered relations; the others name
/// the related resources of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkRelation {
    /// The representation itself
    SelfRel,
    /// The collection the representation belongs to
    Collection,
    /// Orders referencing the entity
    Orders,
    /// The customer an order belongs to
    Customer,
    /// The product an order is for
    Product,
}

impl LinkRelation {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkRelation::SelfRel => "self",
            LinkRelation::Collection => "collection",
            LinkRelation::Orders => "orders",
            LinkRelation::Customer => "customer",
            LinkRelation::Product => "product",
        }
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (relation, href) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    rel: LinkRelation,
    href: String,
}

impl Link {
    /// Create a new link
    pub fn new(rel: LinkRelation, href: impl Into<String>) -> Self {
        Self {
            rel,
            href: href.into(),
        }
    }

    /// Shorthand for a `self` link
    pub fn self_link(href: impl Into<String>) -> Self {
        Self::new(LinkRelation::SelfRel, href)
    }

    pub fn rel(&self) -> LinkRelation {
        self.rel
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}

/// Serializes as `{"href": "..."}`; the relation is the key in the enclosing `_links` object.
impl Serialize for Link {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("href", &self.href)?;
        map.end()
    }
}

/// Ordered set of links, at most one per relation
///
/// Pushing a link for a relation that is already present replaces its href
/// but keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct LinkSet {
    links: IndexMap<LinkRelation, Link>,
}

/// Equal only if the same links appear in the same order
impl PartialEq for LinkSet {
    fn eq(&self, other: &Self) -> bool {
        self.links.iter().eq(other.links.iter())
    }
}

impl Eq for LinkSet {}

impl LinkSet {
    /// Create an empty link set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a link
    pub fn push(&mut self, link: Link) {
        self.links.insert(link.rel, link);
    }

    /// Append a link, builder style
    pub fn with(mut self, link: Link) -> Self {
        self.push(link);
        self
    }

    /// Get the link for a relation, if present
    pub fn get(&self, rel: LinkRelation) -> Option<&Link> {
        self.links.get(&rel)
    }

    /// Get the link for a relation or fail with [`LinkError::MissingRelation`]
    pub fn required(&self, rel: LinkRelation) -> Result<&Link, LinkError> {
        self.get(rel).ok_or(LinkError::MissingRelation { rel })
    }

    /// Relations in insertion order
    pub fn relations(&self) -> Vec<LinkRelation> {
        self.links.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl From<Link> for LinkSet {
    fn from(link: Link) -> Self {
        LinkSet::new().with(link)
    }
}

impl FromIterator<Link> for LinkSet {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        let mut set = LinkSet::new();
        for link in iter {
            set.push(link);
        }
        set
    }
}

impl Serialize for LinkSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.links.iter().map(|(rel, link)| (rel.as_str(), link)))
    }
}
