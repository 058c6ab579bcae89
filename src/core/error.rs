//! Typed error handling
//!
//! # Error Categories
//!
//! - [`LinkError`]: link building failures. These are caller defects (building
//!   links for a transient entity, asking for a route that is not declared),
//!   never transient conditions, so nothing here is retried.
//! - [`ValidationError`]: rejected input when constructing entities
//! - [`ConfigError`]: configuration loading and validation
//! - [`ApiError`]: everything a handler can return; implements axum's
//!   `IntoResponse` so handlers can use `?` directly

use crate::core::entity::{EntityId, EntityKind};
use crate::core::link::LinkRelation;
use crate::links::registry::RouteOperation;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Link Errors
// =============================================================================

/// Errors raised while deriving hypermedia links
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// Links were requested for an entity that has never been persisted
    #[error("cannot build links for a {entity_type} that has no persisted id")]
    UnresolvedIdentity { entity_type: EntityKind },

    /// The route table has no template for this (entity, operation) pair
    #[error("no {operation} route is registered for {entity_type}")]
    UnregisteredRoute {
        entity_type: EntityKind,
        operation: RouteOperation,
    },

    /// A required relation is missing from a link set
    #[error("link relation '{rel}' is not present")]
    MissingRelation { rel: LinkRelation },
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised when input cannot form a valid entity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A text field was empty or whitespace
    #[error("field '{field}' must not be blank")]
    Blank { field: &'static str },

    /// Orders must be for at least one unit
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// quantity * price does not fit the price type
    #[error("total price overflows for quantity {quantity} at unit price {price}")]
    TotalPriceOverflow { quantity: u32, price: u64 },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid YAML for [`crate::config::AppConfig`]
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The configured base URL is not a URL at all
    #[error("invalid base_url '{value}': {source}")]
    UnparsableBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// The configured base URL cannot prefix generated links
    #[error("invalid base_url '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: &'static str },
}

// =============================================================================
// API Errors
// =============================================================================

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Errors surfaced by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// A lookup by id found nothing
    #[error("{entity_type} with id '{id}' not found")]
    NotFound {
        entity_type: EntityKind,
        id: EntityId,
    },

    #[error(transparent)]
    Link(#[from] LinkError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body is not valid JSON for the expected payload
    #[error("invalid request body: {0}")]
    BadRequest(#[from] JsonRejection),

    /// The store failed to answer
    #[error("storage failure: {0}")]
    Storage(anyhow::Error),
}

impl ApiError {
    /// Shorthand for [`ApiError::NotFound`]
    pub fn not_found(entity_type: EntityKind, id: EntityId) -> Self {
        ApiError::NotFound { entity_type, id }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Link(_) | ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "ENTITY_NOT_FOUND",
            ApiError::Link(LinkError::UnresolvedIdentity { .. }) => "UNRESOLVED_IDENTITY",
            ApiError::Link(LinkError::UnregisteredRoute { .. }) => "UNREGISTERED_ROUTE",
            ApiError::Link(LinkError::MissingRelation { .. }) => "MISSING_RELATION",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::BadRequest(_) => "INVALID_BODY",
            ApiError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::NotFound { entity_type, id } => Some(serde_json::json!({
                "entity_type": entity_type.singular(),
                "id": id
            })),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Storage(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        } else {
            tracing::warn!(code = self.error_code(), "{}", self);
        }
        (status, Json(self.to_response())).into_response()
    }
}
