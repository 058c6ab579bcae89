//! Core module containing fundamental traits and types

pub mod entity;
pub mod error;
pub mod link;
pub mod pluralize;
pub mod store;

pub use entity::{Entity, EntityId, EntityKind};
pub use error::{ApiError, ConfigError, ErrorResponse, LinkError, ValidationError};
pub use link::{Link, LinkRelation, LinkSet};
pub use pluralize::Pluralizer;
pub use store::{EntityStore, OrderStore};
