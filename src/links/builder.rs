//! Link builders
//!
//! A link builder decorates one entity kind with its hypermedia links. Every
//! href comes from the [`RouteTemplateRegistry`], never from a hand-written
//! string. Implementing [`LinkBuilder::entity_links`] is all a new entity kind
//! needs; envelope assembly for single entities and collections is provided.

use crate::core::entity::{Entity, EntityId, EntityKind};
use crate::core::error::LinkError;
use crate::core::link::{Link, LinkRelation, LinkSet};
use crate::entities::{Customer, Order, Product};
use crate::links::envelope::{CollectionModel, EntityModel};
use crate::links::registry::RouteTemplateRegistry;
use std::sync::Arc;

/// Builds the link set of one entity kind and wraps entities in envelopes
pub trait LinkBuilder: Send + Sync {
    type Entity: Entity;

    /// The route table hrefs are derived from
    fn registry(&self) -> &RouteTemplateRegistry;

    /// Links of a single persisted entity, in a fixed order
    ///
    /// Fails with [`LinkError::UnresolvedIdentity`] if the entity (or an
    /// entity it links to) has no id.
    fn entity_links(&self, entity: &Self::Entity) -> Result<LinkSet, LinkError>;

    /// The `self` link of the entity kind's collection
    fn collection_link(&self) -> Link {
        Link::self_link(self.registry().collection_href(<Self::Entity as Entity>::kind()))
    }

    /// Wrap one entity with its links
    fn to_model(&self, entity: Self::Entity) -> Result<EntityModel<Self::Entity>, LinkError> {
        let links = self.entity_links(&entity)?;
        Ok(EntityModel::new(entity, links))
    }

    /// Wrap a collection: each item with its own links, plus the collection `self` link
    fn to_collection_model(
        &self,
        entities: Vec<Self::Entity>,
    ) -> Result<CollectionModel<Self::Entity>, LinkError> {
        self.to_collection_model_with(entities, self.collection_link())
    }

    /// Wrap a collection served from a route other than the kind's collection,
    /// e.g. the orders of one product
    fn to_collection_model_with(
        &self,
        entities: Vec<Self::Entity>,
        self_link: Link,
    ) -> Result<CollectionModel<Self::Entity>, LinkError> {
        let items = entities
            .into_iter()
            .map(|entity| self.to_model(entity))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CollectionModel::new(items, LinkSet::from(self_link)))
    }
}

/// self, collection, orders: shared by every kind that orders reference
fn owner_links<E: Entity>(registry: &RouteTemplateRegistry, entity: &E) -> Result<LinkSet, LinkError> {
    let kind = E::kind();
    let id = entity.require_id()?;
    Ok(LinkSet::new()
        .with(Link::self_link(registry.item_href(kind, id)))
        .with(Link::new(
            LinkRelation::Collection,
            registry.collection_href(kind),
        ))
        .with(Link::new(LinkRelation::Orders, registry.orders_href(kind, id)?)))
}

/// Links for customers: self, collection, orders
#[derive(Clone)]
pub struct CustomerLinks {
    registry: Arc<RouteTemplateRegistry>,
}

impl CustomerLinks {
    pub fn new(registry: Arc<RouteTemplateRegistry>) -> Self {
        Self { registry }
    }
}

impl LinkBuilder for CustomerLinks {
    type Entity = Customer;

    fn registry(&self) -> &RouteTemplateRegistry {
        &self.registry
    }

    fn entity_links(&self, customer: &Customer) -> Result<LinkSet, LinkError> {
        owner_links(&self.registry, customer)
    }
}

/// Links for products: self, collection, orders
#[derive(Clone)]
pub struct ProductLinks {
    registry: Arc<RouteTemplateRegistry>,
}

impl ProductLinks {
    pub fn new(registry: Arc<RouteTemplateRegistry>) -> Self {
        Self { registry }
    }
}

impl LinkBuilder for ProductLinks {
    type Entity = Product;

    fn registry(&self) -> &RouteTemplateRegistry {
        &self.registry
    }

    fn entity_links(&self, product: &Product) -> Result<LinkSet, LinkError> {
        owner_links(&self.registry, product)
    }
}

/// Links for orders: self, customer, product
///
/// The customer and product hrefs resolve through their own item templates.
#[derive(Clone)]
pub struct OrderLinks {
    registry: Arc<RouteTemplateRegistry>,
}

impl OrderLinks {
    pub fn new(registry: Arc<RouteTemplateRegistry>) -> Self {
        Self { registry }
    }

    /// `self` link for the orders of one customer or product
    pub fn orders_of_link(&self, owner: EntityKind, id: EntityId) -> Result<Link, LinkError> {
        Ok(Link::self_link(self.registry.orders_href(owner, id)?))
    }
}

impl LinkBuilder for OrderLinks {
    type Entity = Order;

    fn registry(&self) -> &RouteTemplateRegistry {
        &self.registry
    }

    fn entity_links(&self, order: &Order) -> Result<LinkSet, LinkError> {
        let id = order.require_id()?;
        let customer_id = order.customer().require_id()?;
        let product_id = order.product().require_id()?;

        Ok(LinkSet::new()
            .with(Link::self_link(self.registry.item_href(EntityKind::Order, id)))
            .with(Link::new(
                LinkRelation::Customer,
                self.registry.item_href(EntityKind::Customer, customer_id),
            ))
            .with(Link::new(
                LinkRelation::Product,
                self.registry.item_href(EntityKind::Product, product_id),
            )))
    }
}
