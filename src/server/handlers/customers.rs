//! Customer HTTP handlers

use super::location_of;
use crate::core::entity::{Entity, EntityId, EntityKind};
use crate::core::error::{ApiError, ValidationError};
use crate::entities::Customer;
use crate::links::{CollectionModel, EntityModel, LinkBuilder, RouteTemplateRegistry};
use crate::server::entity_registry::EntityDescriptor;
use crate::server::extractors::JsonBody;
use crate::server::host::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::{Router, routing::get};
use serde::Deserialize;

/// Request body for creating a customer
#[derive(Debug, Deserialize)]
pub struct NewCustomer {
    pub name: String,
}

/// GET /customers
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<CollectionModel<Customer>>, ApiError> {
    let customers = state.customers.find_all().await?;
    Ok(Json(state.customer_links.to_collection_model(customers)?))
}

/// GET /customers/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<EntityModel<Customer>>, ApiError> {
    let customer = state
        .customers
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(EntityKind::Customer, id))?;

    Ok(Json(state.customer_links.to_model(customer)?))
}

/// POST /customers
pub async fn create_customer(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewCustomer>,
) -> Result<impl IntoResponse, ApiError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ValidationError::Blank { field: "name" }.into());
    }

    let customer = state.customers.save(Customer::new(name.to_string())).await?;
    let model = state.customer_links.to_model(customer)?;
    tracing::info!(id = ?model.content().id(), "created customer");

    Ok((StatusCode::CREATED, location_of(model.links())?, Json(model)))
}

/// Descriptor for the Customer entity
pub struct CustomerDescriptor;

impl EntityDescriptor for CustomerDescriptor {
    fn kind(&self) -> EntityKind {
        EntityKind::Customer
    }

    fn build_routes(&self, registry: &RouteTemplateRegistry) -> Router<AppState> {
        let routes = registry.routes(EntityKind::Customer);

        Router::new()
            .route(
                routes.collection.path(),
                get(list_customers).post(create_customer),
            )
            .route(routes.item.path(), get(get_customer))
    }
}
