//! Product HTTP handlers

use super::location_of;
use crate::core::entity::{Entity, EntityId, EntityKind};
use crate::core::error::{ApiError, ValidationError};
use crate::entities::Product;
use crate::links::{CollectionModel, EntityModel, LinkBuilder, RouteTemplateRegistry};
use crate::server::entity_registry::EntityDescriptor;
use crate::server::extractors::JsonBody;
use crate::server::host::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::{Router, routing::get};
use serde::Deserialize;

/// Request body for creating a product
#[derive(Debug, Deserialize)]
pub struct NewProduct {
    pub name: String,
    /// Unit price in minor currency units
    pub price: u64,
}

/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<CollectionModel<Product>>, ApiError> {
    let products = state.products.find_all().await?;
    Ok(Json(state.product_links.to_collection_model(products)?))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<EntityModel<Product>>, ApiError> {
    let product = state
        .products
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(EntityKind::Product, id))?;

    Ok(Json(state.product_links.to_model(product)?))
}

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewProduct>,
) -> Result<impl IntoResponse, ApiError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ValidationError::Blank { field: "name" }.into());
    }

    let product = state
        .products
        .save(Product::new(name.to_string(), payload.price))
        .await?;
    let model = state.product_links.to_model(product)?;
    tracing::info!(id = ?model.content().id(), "created product");

    Ok((StatusCode::CREATED, location_of(model.links())?, Json(model)))
}

/// Descriptor for the Product entity
pub struct ProductDescriptor;

impl EntityDescriptor for ProductDescriptor {
    fn kind(&self) -> EntityKind {
        EntityKind::Product
    }

    fn build_routes(&self, registry: &RouteTemplateRegistry) -> Router<AppState> {
        let routes = registry.routes(EntityKind::Product);

        Router::new()
            .route(
                routes.collection.path(),
                get(list_products).post(create_product),
            )
            .route(routes.item.path(), get(get_product))
    }
}
