//! Macros for reducing boilerplate when defining entities
//!
//! Every entity carries a store-assigned `id: Option<EntityId>`; these macros
//! generate the struct and the [`Entity`](crate::core::entity::Entity) impl
//! around it.

/// Implement [`Entity`](crate::core::entity::Entity) for a struct with an
/// `id: Option<EntityId>` field
///
/// # Example
/// ```rust,ignore
/// impl_entity!(Order, Order);
/// ```
#[macro_export]
macro_rules! impl_entity {
    ($type:ident, $kind:ident) => {
        impl $crate::core::entity::Entity for $type {
            fn kind() -> $crate::core::entity::EntityKind {
                $crate::core::entity::EntityKind::$kind
            }

            fn id(&self) -> Option<$crate::core::entity::EntityId> {
                self.id
            }

            fn assign_id(&mut self, id: $crate::core::entity::EntityId) {
                self.id = Some(id);
            }
        }
    };
}

/// Define a plain data entity: the struct, a `new` constructor producing a
/// transient instance, and its `Entity` impl
///
/// Fields serialize in camelCase, after `id`. The `id` field is private, so
/// an assigned identity cannot be overwritten from outside the defining
/// module:
///
/// ```compile_fail
/// use hateoas::entities::Customer;
///
/// let mut thor = Customer::new("Thor".to_string());
/// thor.id = Some(1);
/// ```
///
/// # Example
/// ```rust,ignore
/// impl_data_entity!(
///     /// A product in the catalogue
///     Product, Product, {
///         name: String,
///         price: u64,
///     }
/// );
///
/// let iphone = Product::new("iPhone".to_string(), 80000);
/// assert!(iphone.id().is_none());
/// ```
#[macro_export]
macro_rules! impl_data_entity {
    (
        $(#[$meta:meta])*
        $type:ident,
        $kind:ident,
        {
            $( $(#[$field_meta:meta])* $field:ident : $field_type:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, ::serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $type {
            /// Store-assigned identity, `None` until first saved; read it
            /// through `Entity::id`
            id: Option<$crate::core::entity::EntityId>,

            $(
                $(#[$field_meta])*
                pub $field: $field_type,
            )*
        }

        impl $type {
            /// Create a new transient entity (no id until saved)
            pub fn new($( $field: $field_type ),*) -> Self {
                Self {
                    id: None,
                    $( $field ),*
                }
            }
        }

        $crate::impl_entity!($type, $kind);
    };
}
