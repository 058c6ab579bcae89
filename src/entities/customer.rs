//! Customer entity

use crate::impl_data_entity;

impl_data_entity!(
    /// A customer placing orders
    Customer,
    Customer,
    {
        /// Display name
        name: String,
    }
);
