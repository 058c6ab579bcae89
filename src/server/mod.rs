//! HTTP server
//!
//! `ServerBuilder` wires stores, the route table and link builders into a
//! [`ServerHost`]; [`RestExposure`] turns the host into an Axum router.

pub mod builder;
pub mod entity_registry;
pub mod exposure;
pub mod extractors;
pub mod handlers;
pub mod host;

pub use builder::{ServerBuilder, serve_router};
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use exposure::RestExposure;
pub use extractors::JsonBody;
pub use host::{AppState, ServerHost};
