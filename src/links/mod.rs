//! Hypermedia link derivation
//!
//! The route template registry is the single source of truth for URLs; link
//! builders expand its templates and envelopes attach the results to
//! serialized entities.

pub mod builder;
pub mod envelope;
pub mod registry;

pub use builder::{CustomerLinks, LinkBuilder, OrderLinks, ProductLinks};
pub use envelope::{CollectionModel, EntityModel};
pub use registry::{ResourceRoutes, RouteOperation, RouteTemplate, RouteTemplateRegistry};
