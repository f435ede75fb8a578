//! Validated query-string extractor for Axum
//!
//! `ValidatedQuery<T>` works like `axum::extract::Query<T>`, but additionally
//! runs `validator::Validate::validate()` on the deserialized value.
//! Both malformed values and constraint violations are answered with 422
//! and field-level details, before the handler runs.

use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::{ApiResponse, FieldError};

/// An extractor that deserializes the query string and validates it.
///
/// # Usage
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Window {
///     #[validate(range(min = 1, max = 100))]
///     size: Option<u32>,
/// }
///
/// async fn handler(ValidatedQuery(window): ValidatedQuery<Window>) {
///     // `window` is guaranteed to pass validation
/// }
/// ```
pub struct ValidatedQuery<T>(pub T);

/// Error type for `ValidatedQuery` extraction failures.
#[derive(Debug)]
pub enum ValidatedQueryRejection {
    /// A parameter could not be parsed (e.g. `page=abc`).
    QueryError(QueryRejection),
    /// Validation failed.
    ValidationError(validator::ValidationErrors),
}

impl ValidatedQueryRejection {
    fn field_errors(&self) -> Vec<FieldError> {
        match self {
            Self::QueryError(rejection) => {
                let text = rejection.body_text();
                let detail = text
                    .strip_prefix("Failed to deserialize query string: ")
                    .unwrap_or(&text);
                let (field, message) = match detail.split_once(": ") {
                    Some((field, message)) => (field.to_string(), message.to_string()),
                    None => ("query".to_string(), detail.to_string()),
                };
                vec![FieldError { field, message }]
            }
            Self::ValidationError(errors) => {
                let mut fields: Vec<FieldError> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errs)| {
                        errs.iter().map(move |e| FieldError {
                            field: field.to_string(),
                            message: e
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string()),
                        })
                    })
                    .collect();
                fields.sort_by(|a, b| a.field.cmp(&b.field));
                fields
            }
        }
    }
}

impl IntoResponse for ValidatedQueryRejection {
    fn into_response(self) -> Response {
        let details = self.field_errors();
        let message = if details.is_empty() {
            "Validation failed".to_string()
        } else {
            details
                .iter()
                .map(|f| format!("{}: {}", f.field, f.message))
                .collect::<Vec<_>>()
                .join("; ")
        };

        let body = ApiResponse::<()>::validation(message, details);
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ValidatedQueryRejection::QueryError)?;

        value
            .validate()
            .map_err(ValidatedQueryRejection::ValidationError)?;

        Ok(ValidatedQuery(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
