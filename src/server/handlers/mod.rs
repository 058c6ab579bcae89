//! HTTP handlers translating requests into store queries and link-decorated responses
//!
//! Each entity module also provides the [`EntityDescriptor`](crate::server::EntityDescriptor)
//! registering its handlers on the route table.

pub mod customers;
pub mod orders;
pub mod products;

pub use customers::CustomerDescriptor;
pub use orders::OrderDescriptor;
pub use products::ProductDescriptor;

use crate::core::error::LinkError;
use crate::core::link::{LinkRelation, LinkSet};
use axum::http::{HeaderName, HeaderValue, header};
use axum::response::AppendHeaders;

type LocationHeader = AppendHeaders<Option<(HeaderName, HeaderValue)>>;

/// `Location` header pointing at a freshly created resource's `self` link
///
/// A created resource without a `self` link is a [`LinkError::MissingRelation`].
/// An href that is not a valid header value leaves the header out.
pub(crate) fn location_of(links: &LinkSet) -> Result<LocationHeader, LinkError> {
    let location = HeaderValue::from_str(links.required(LinkRelation::SelfRel)?.href()).ok();
    Ok(AppendHeaders(location.map(|value| (header::LOCATION, value))))
}
