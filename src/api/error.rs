//! HTTP error responses
//!
//! Maps domain errors onto status codes and JSON bodies. Validation failures
//! use the `{status, message, errors}` shape; everything else uses
//! `{code, message}`.

use super::request::FieldError;
use crate::domain::SitelogError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

const VALIDATION_MESSAGE: &str = "Invalid request data";
const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

/// Error returned by a route handler
#[derive(Debug)]
pub enum ApiError {
    /// Request body failed boundary validation
    Validation(Vec<FieldError>),

    /// Error raised by the report service
    Service(SitelogError),

    /// No route matched
    RouteNotFound,
}

#[derive(Debug, Serialize)]
struct ValidationBody {
    status: &'static str,
    message: &'static str,
    errors: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl From<SitelogError> for ApiError {
    fn from(error: SitelogError) -> Self {
        ApiError::Service(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![FieldError::new("body", rejection.body_text())])
    }
}

impl ApiError {
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        let (status, code, message) = match self {
            ApiError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                VALIDATION_MESSAGE.to_string(),
            ),
            ApiError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Endpoint not found".to_string(),
            ),
            ApiError::Service(error) => match error {
                SitelogError::MappingNotFound(_) => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", error.to_string())
                }
                SitelogError::FallbackExhausted => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SERVICE_UNAVAILABLE",
                    error.to_string(),
                ),
                SitelogError::Transport { .. } if error.is_provider_not_found() => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", error.to_string())
                }
                SitelogError::Transport { .. } => (
                    StatusCode::BAD_GATEWAY,
                    "PROVIDER_ERROR",
                    error.to_string(),
                ),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_SERVER_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                ),
            },
        };

        (status, ErrorBody { code, message })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Service(error) = &self {
            match error {
                SitelogError::MappingNotFound(_) | SitelogError::FallbackExhausted => {
                    tracing::warn!(error = %error, "Request failed");
                }
                _ => {
                    tracing::error!(error = %error, "Request failed");
                }
            }
        }

        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationBody {
                    status: "error",
                    message: VALIDATION_MESSAGE,
                    errors,
                }),
            )
                .into_response(),
            other => {
                let (status, body) = other.status_and_body();
                (status, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProviderName, TransportError};
    use test_case::test_case;

    fn status_of(error: SitelogError) -> (StatusCode, &'static str) {
        let (status, body) = ApiError::Service(error).status_and_body();
        (status, body.code)
    }

    #[test_case(SitelogError::MappingNotFound("abc".into()), StatusCode::NOT_FOUND, "NOT_FOUND" ; "unknown id")]
    #[test_case(SitelogError::FallbackExhausted, StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE" ; "fallback exhausted")]
    #[test_case(
        SitelogError::transport(ProviderName::Vate, TransportError::NotFound("gone".into())),
        StatusCode::NOT_FOUND,
        "NOT_FOUND"
        ; "provider record missing"
    )]
    #[test_case(
        SitelogError::transport(ProviderName::Argelor, TransportError::Timeout("5s".into())),
        StatusCode::BAD_GATEWAY,
        "PROVIDER_ERROR"
        ; "provider timeout"
    )]
    #[test_case(SitelogError::ProviderNotFound(ProviderName::Argelor), StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR" ; "provider not configured")]
    #[test_case(SitelogError::Other("boom".into()), StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR" ; "unexpected")]
    fn test_service_error_status(
        error: SitelogError,
        expected_status: StatusCode,
        expected_code: &str,
    ) {
        let (status, code) = status_of(error);
        assert_eq!(status, expected_status);
        assert_eq!(code, expected_code);
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let (_, body) =
            ApiError::Service(SitelogError::Other("db password leaked".into())).status_and_body();
        assert_eq!(body.message, INTERNAL_MESSAGE);
    }

    #[test]
    fn test_validation_response_is_bad_request() {
        let response =
            ApiError::Validation(vec![FieldError::new("body.id", "Required")]).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_route_not_found_response() {
        let response = ApiError::RouteNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
