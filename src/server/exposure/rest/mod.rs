//! REST API exposure
//!
//! Consumes a [`ServerHost`] and produces an Axum `Router` serving the health
//! checks, every registered entity's routes and any custom routes.

use crate::server::host::ServerHost;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Entity routes are registered on the host's route table, the same table
    /// its link builders expand, so every `self` link resolves to a handler.
    pub fn build_router(host: &ServerHost, custom_routes: Vec<Router>) -> Router {
        let entity_routes = host
            .entity_registry
            .build_routes(&host.state.registry)
            .with_state(host.state.clone());

        let mut app = Self::health_routes().merge(entity_routes);
        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app.layer(TraceLayer::new_for_http())
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "hateoas-rs"
        }))
    }
}
