//! Order HTTP handlers
//!
//! Besides the order collection itself, orders are browsable per customer and
//! per product. Those routes belong to the order resource but hang off the
//! owner's `orders` template, so this descriptor registers them.

use super::location_of;
use crate::core::entity::{EntityId, EntityKind};
use crate::core::error::ApiError;
use crate::entities::Order;
use crate::links::{CollectionModel, EntityModel, LinkBuilder, RouteTemplateRegistry};
use crate::server::entity_registry::EntityDescriptor;
use crate::server::extractors::JsonBody;
use crate::server::host::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::{Router, routing::get};
use serde::Deserialize;

/// Request body for placing an order
///
/// The total price is never accepted from clients; it is derived from the
/// referenced product.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer_id: EntityId,
    pub product_id: EntityId,
    pub quantity: u32,
}

/// GET /orders
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<CollectionModel<Order>>, ApiError> {
    let orders = state.orders.find_all().await?;
    Ok(Json(state.order_links.to_collection_model(orders)?))
}

/// GET /orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<EntityModel<Order>>, ApiError> {
    let order = state
        .orders
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(EntityKind::Order, id))?;

    Ok(Json(state.order_links.to_model(order)?))
}

/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewOrder>,
) -> Result<impl IntoResponse, ApiError> {
    let customer = state
        .customers
        .find_by_id(payload.customer_id)
        .await?
        .ok_or_else(|| ApiError::not_found(EntityKind::Customer, payload.customer_id))?;
    let product = state
        .products
        .find_by_id(payload.product_id)
        .await?
        .ok_or_else(|| ApiError::not_found(EntityKind::Product, payload.product_id))?;

    let order = state
        .orders
        .save(Order::new(customer, product, payload.quantity)?)
        .await?;
    let model = state.order_links.to_model(order)?;
    tracing::info!(
        id = ?model.content().id(),
        customer_id = payload.customer_id,
        product_id = payload.product_id,
        total_price = model.content().total_price(),
        "created order"
    );

    Ok((StatusCode::CREATED, location_of(model.links())?, Json(model)))
}

/// GET /orders/customer/{id}
pub async fn orders_of_customer(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<CollectionModel<Order>>, ApiError> {
    let orders = state.orders.find_by_customer(id).await?;
    let self_link = state.order_links.orders_of_link(EntityKind::Customer, id)?;
    Ok(Json(
        state.order_links.to_collection_model_with(orders, self_link)?,
    ))
}

/// GET /orders/product/{id}
pub async fn orders_of_product(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<CollectionModel<Order>>, ApiError> {
    let orders = state.orders.find_by_product(id).await?;
    let self_link = state.order_links.orders_of_link(EntityKind::Product, id)?;
    Ok(Json(
        state.order_links.to_collection_model_with(orders, self_link)?,
    ))
}

/// Descriptor for the Order entity
pub struct OrderDescriptor;

impl EntityDescriptor for OrderDescriptor {
    fn kind(&self) -> EntityKind {
        EntityKind::Order
    }

    fn build_routes(&self, registry: &RouteTemplateRegistry) -> Router<AppState> {
        let routes = registry.routes(EntityKind::Order);

        let mut router = Router::new()
            .route(routes.collection.path(), get(list_orders).post(create_order))
            .route(routes.item.path(), get(get_order));

        if let Some(template) = &registry.routes(EntityKind::Customer).orders {
            router = router.route(template.path(), get(orders_of_customer));
        }
        if let Some(template) = &registry.routes(EntityKind::Product).orders {
            router = router.route(template.path(), get(orders_of_product));
        }

        router
    }
}
