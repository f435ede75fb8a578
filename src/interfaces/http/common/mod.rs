//! Common HTTP DTOs and extractors

pub mod validated_query;

pub use validated_query::{ValidatedQuery, ValidatedQueryRejection};

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{DomainError, DomainResult};
use crate::shared::{PaginationData, DEFAULT_PAGE};

/// Standard API response envelope
///
/// Success payloads of list endpoints are returned bare; this envelope
/// carries errors: `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload. `null` on error
    pub data: Option<T>,
    /// Error description. Omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Per-field problems, present for validation failures only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            details: None,
        }
    }

    pub fn validation(message: impl Into<String>, details: Vec<FieldError>) -> Self {
        Self {
            details: Some(details),
            ..Self::error(message)
        }
    }
}

/// Empty payload, used to document error bodies
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

/// One rejected request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// Map a domain error to an HTTP error.
///
/// Store failures stay opaque to the caller; the cause is logged where the
/// error is raised.
pub fn error_response(e: DomainError) -> ApiError {
    match e {
        DomainError::Validation(msg) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::error(msg)),
        ),
        DomainError::Database(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Internal server error")),
        ),
    }
}

/// Pagination query parameters
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (starting at 1). Default: 1
    #[validate(range(min = 1, message = "must be greater than or equal to 1"))]
    #[param(minimum = 1, default = 1)]
    pub page: Option<u32>,
    /// Page size (1–100). Default: 50
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100, default = 50)]
    pub size: Option<u32>,
}

impl PaginationParams {
    /// Fill in defaults and derive the page request.
    pub fn resolve(&self, default_size: u32) -> DomainResult<PaginationData> {
        PaginationData::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.size.unwrap_or(default_size),
        )
    }
}

/// Paginated list response
///
/// Echoes the page request next to the results. There is no total count:
/// a page shorter than `size` is the last one.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub pagination: PaginationData,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(pagination: PaginationData, results: Vec<T>) -> Self {
        Self {
            pagination,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_params_use_defaults() {
        let p = PaginationParams::default().resolve(50).unwrap();
        assert_eq!(p, PaginationData::new(1, 50).unwrap());
        assert_eq!(p.db_offset(), 0);
        assert_eq!(p.db_limit(), 50);
    }

    #[test]
    fn configured_default_size_applies_only_when_omitted() {
        let params = PaginationParams {
            page: Some(3),
            size: None,
        };
        assert_eq!(params.resolve(20).unwrap().db_offset(), 40);

        let params = PaginationParams {
            page: None,
            size: Some(5),
        };
        assert_eq!(params.resolve(20).unwrap().size, 5);
    }

    #[test]
    fn validator_rejects_bounds() {
        for (page, size) in [(Some(0), None), (None, Some(0)), (None, Some(101))] {
            let params = PaginationParams { page, size };
            assert!(params.validate().is_err(), "{:?}", params);
        }
        let params = PaginationParams {
            page: Some(1),
            size: Some(100),
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn store_errors_are_opaque() {
        let (status, Json(body)) =
            error_response(DomainError::Database("password authentication failed".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some("Internal server error"));
    }

    #[test]
    fn validation_errors_are_unprocessable() {
        let (status, _) = error_response(DomainError::Validation("size".into()));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn error_envelope_shape() {
        let body = ApiResponse::<()>::validation(
            "page: must be greater than or equal to 1",
            vec![FieldError {
                field: "page".into(),
                message: "must be greater than or equal to 1".into(),
            }],
        );
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["details"][0]["field"], "page");
    }
}
