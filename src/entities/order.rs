//! Order entity

use crate::core::entity::EntityId;
use crate::core::error::ValidationError;
use crate::entities::{Customer, Product};
use crate::impl_entity;
use serde::Serialize;

/// An order of some quantity of one product by one customer
///
/// The customer and product are snapshots taken when the order is placed.
/// `total_price` is derived from them at construction and cannot be set by
/// callers, so it always equals `quantity * product.price` as of ordering time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: Option<EntityId>,
    customer: Customer,
    product: Product,
    quantity: u32,
    total_price: u64,
}

impl Order {
    /// Create a new transient order
    ///
    /// Fails if `quantity` is zero or the total price does not fit in a `u64`.
    pub fn new(customer: Customer, product: Product, quantity: u32) -> Result<Self, ValidationError> {
        if quantity == 0 {
            return Err(ValidationError::ZeroQuantity);
        }

        let total_price = product.price.checked_mul(u64::from(quantity)).ok_or(
            ValidationError::TotalPriceOverflow {
                quantity,
                price: product.price,
            },
        )?;

        Ok(Self {
            id: None,
            customer,
            product,
            quantity,
            total_price,
        })
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_price(&self) -> u64 {
        self.total_price
    }
}

impl_entity!(Order, Order);
