//! Product entity

use crate::impl_data_entity;

impl_data_entity!(
    /// A product that can be ordered
    Product,
    Product,
    {
        /// Display name
        name: String,
        /// Unit price in minor currency units
        price: u64,
    }
);
