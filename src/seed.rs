//! Demo data loaded at startup

use crate::core::store::{EntityStore, OrderStore};
use crate::entities::{Customer, Order, Product};
use anyhow::Result;

/// Counts of entities written by [`load_static_data`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
}

/// Populate empty stores with two customers, two products and three orders
///
/// Prices are in minor currency units.
pub async fn load_static_data(
    customers: &dyn EntityStore<Customer>,
    products: &dyn EntityStore<Product>,
    orders: &dyn OrderStore,
) -> Result<SeedSummary> {
    let saved_customers = customers
        .save_all(vec![
            Customer::new("Ironman".to_string()),
            Customer::new("Thor".to_string()),
        ])
        .await?;
    let [ironman, thor] = <[Customer; 2]>::try_from(saved_customers)
        .map_err(|saved| anyhow::anyhow!("expected 2 seeded customers, got {}", saved.len()))?;

    let saved_products = products
        .save_all(vec![
            Product::new("iPhone".to_string(), 80_000),
            Product::new("MacBook Pro".to_string(), 200_000),
        ])
        .await?;
    let [iphone, macbook] = <[Product; 2]>::try_from(saved_products)
        .map_err(|saved| anyhow::anyhow!("expected 2 seeded products, got {}", saved.len()))?;

    let saved_orders = orders
        .save_all(vec![
            Order::new(ironman.clone(), iphone.clone(), 2)?,
            Order::new(ironman, macbook, 1)?,
            Order::new(thor, iphone, 1)?,
        ])
        .await?;

    let summary = SeedSummary {
        customers: 2,
        products: 2,
        orders: saved_orders.len(),
    };
    tracing::info!(
        customers = summary.customers,
        products = summary.products,
        orders = summary.orders,
        "loaded static data"
    );

    Ok(summary)
}
