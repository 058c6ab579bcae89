//! Route template registry
//!
//! Holds, for every entity kind, the URL templates of its collection, item
//! and related-orders routes. The HTTP router registers handlers on exactly
//! these templates (`{id}` is axum's capture syntax) and the link builders
//! expand the same templates into hrefs, so links can never drift from the
//! routing table.

use crate::config::LinksConfig;
use crate::core::entity::{EntityId, EntityKind};
use crate::core::error::LinkError;
use std::fmt;

/// Kind of route declared for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteOperation {
    /// All entities of the kind, e.g. `/customers`
    Collection,
    /// One entity by id, e.g. `/customers/{id}`
    Item,
    /// Orders referencing one entity, e.g. `/orders/customer/{id}`
    Orders,
}

impl fmt::Display for RouteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RouteOperation::Collection => "collection",
            RouteOperation::Item => "item",
            RouteOperation::Orders => "orders",
        };
        f.write_str(name)
    }
}

/// A URL path pattern with at most one `{id}` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    path: String,
}

impl RouteTemplate {
    /// The placeholder substituted by [`RouteTemplate::expand`]
    pub const ID_PLACEHOLDER: &'static str = "{id}";

    fn new(path: String) -> Self {
        Self { path }
    }

    /// The raw pattern, as registered with the router
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Substitute `id` for the placeholder
    pub fn expand(&self, id: EntityId) -> String {
        self.path.replace(Self::ID_PLACEHOLDER, &id.to_string())
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// The routes declared for one entity kind
#[derive(Debug, Clone)]
pub struct ResourceRoutes {
    pub collection: RouteTemplate,
    pub item: RouteTemplate,
    /// `None` for kinds that orders do not reference
    pub orders: Option<RouteTemplate>,
}

/// Registry for resolving (entity kind, operation) pairs to route templates
///
/// Built once at startup; lookups are pure.
#[derive(Debug, Clone)]
pub struct RouteTemplateRegistry {
    href_prefix: String,
    routes: [ResourceRoutes; 3],
}

impl RouteTemplateRegistry {
    /// Build the routing table
    ///
    /// Collection paths are the pluralized singular name. Orders of a customer
    /// or product live under the order collection:
    /// `/{orders}/{singular}/{id}`.
    pub fn new(config: &LinksConfig) -> Self {
        Self {
            href_prefix: config.href_prefix().to_string(),
            routes: EntityKind::ALL.map(Self::declare),
        }
    }

    fn declare(kind: EntityKind) -> ResourceRoutes {
        let collection = format!("/{}", kind.plural());
        let item = format!("{}/{}", collection, RouteTemplate::ID_PLACEHOLDER);
        let orders = match kind {
            EntityKind::Customer | EntityKind::Product => Some(RouteTemplate::new(format!(
                "/{}/{}/{}",
                EntityKind::Order.plural(),
                kind.singular(),
                RouteTemplate::ID_PLACEHOLDER
            ))),
            EntityKind::Order => None,
        };

        ResourceRoutes {
            collection: RouteTemplate::new(collection),
            item: RouteTemplate::new(item),
            orders,
        }
    }

    /// All routes declared for a kind
    pub fn routes(&self, kind: EntityKind) -> &ResourceRoutes {
        &self.routes[kind.index()]
    }

    /// Resolve the template for an (entity kind, operation) pair
    pub fn template_for(
        &self,
        kind: EntityKind,
        operation: RouteOperation,
    ) -> Result<&RouteTemplate, LinkError> {
        let routes = self.routes(kind);
        match operation {
            RouteOperation::Collection => Ok(&routes.collection),
            RouteOperation::Item => Ok(&routes.item),
            RouteOperation::Orders => {
                routes.orders.as_ref().ok_or(LinkError::UnregisteredRoute {
                    entity_type: kind,
                    operation,
                })
            }
        }
    }

    /// Href of a kind's collection
    pub fn collection_href(&self, kind: EntityKind) -> String {
        self.href(&self.routes(kind).collection, None)
    }

    /// Href of one entity
    pub fn item_href(&self, kind: EntityKind, id: EntityId) -> String {
        self.href(&self.routes(kind).item, Some(id))
    }

    /// Href of the orders referencing one entity
    pub fn orders_href(&self, kind: EntityKind, id: EntityId) -> Result<String, LinkError> {
        let template = self.template_for(kind, RouteOperation::Orders)?;
        Ok(self.href(template, Some(id)))
    }

    fn href(&self, template: &RouteTemplate, id: Option<EntityId>) -> String {
        let path = match id {
            Some(id) => template.expand(id),
            None => template.path().to_string(),
        };
        format!("{}{}", self.href_prefix, path)
    }

    /// Every declared (kind, operation, template) triple, for introspection
    pub fn list_routes(&self) -> Vec<(EntityKind, RouteOperation, &RouteTemplate)> {
        EntityKind::ALL
            .iter()
            .flat_map(|&kind| {
                let routes = self.routes(kind);
                [
                    Some((kind, RouteOperation::Collection, &routes.collection)),
                    Some((kind, RouteOperation::Item, &routes.item)),
                    routes
                        .orders
                        .as_ref()
                        .map(|template| (kind, RouteOperation::Orders, template)),
                ]
            })
            .flatten()
            .collect()
    }
}

impl Default for RouteTemplateRegistry {
    fn default() -> Self {
        Self::new(&LinksConfig::default())
    }
}
