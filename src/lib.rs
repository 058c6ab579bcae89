//! # hateoas-rs
//!
//! A small order-management REST API whose responses carry hypermedia links
//! (HAL style `_links` / `_embedded`).
//!
//! ## Features
//!
//! - **Single route table**: [`links::RouteTemplateRegistry`] declares every
//!   URL once; the router dispatches on it and the link builders expand it
//! - **Typed relations**: link relations are a closed enum, link sets keep
//!   insertion order
//! - **Derived order totals**: an order's total is computed from the product
//!   price when it is placed
//! - **Pluggable storage**: handlers only see the [`core::EntityStore`] and
//!   [`core::OrderStore`] traits; [`storage::InMemoryStore`] ships by default
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hateoas::prelude::*;
//!
//! let host = ServerBuilder::new().with_config(AppConfig::from_env()?).build_host()?;
//! load_static_data(
//!     host.state.customers.as_ref(),
//!     host.state.products.as_ref(),
//!     host.state.orders.as_ref(),
//! )
//! .await?;
//! serve_router(RestExposure::build_router(&host, Vec::new()), "127.0.0.1:8080").await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod links;
pub mod seed;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, Entity, EntityId, EntityKind, EntityStore, Link, LinkError, LinkRelation,
        LinkSet, OrderStore, ValidationError,
    };

    // === Entities ===
    pub use crate::entities::{Customer, Order, Product};

    // === Links ===
    pub use crate::links::{
        CollectionModel, CustomerLinks, EntityModel, LinkBuilder, OrderLinks, ProductLinks,
        RouteOperation, RouteTemplateRegistry,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::{AppConfig, LinksConfig, ServerConfig};

    // === Server ===
    pub use crate::seed::load_static_data;
    pub use crate::server::{
        AppState, EntityDescriptor, EntityRegistry, RestExposure, ServerBuilder, ServerHost,
        serve_router,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
