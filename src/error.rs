use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::validate::ValidationError;

/// Request-terminal error taxonomy. Every variant maps to one status code
/// and a JSON body of the form `{"error": "..."}`; internal causes are
/// logged at the call site and never surfaced to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body or path parameters could not be decoded.
    #[error("{0}")]
    BadRequest(&'static str),

    /// A declared constraint on the request was unmet.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The password hashing step rejected its input.
    #[error("{0}")]
    Hash(String),

    /// Point lookup found nothing; message is a fixed generic string.
    #[error("{0}")]
    NotFound(&'static str),

    /// Persistence failed; message is a fixed generic string.
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) | ApiError::Hash(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{Constraint, Field, Rule, ValidateRequest};

    #[test]
    fn statuses_match_taxonomy() {
        assert_eq!(
            ApiError::BadRequest("Request parsing failed").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Hash("input too long".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("User not found").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("Failed to create user").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_error_message_is_surfaced() {
        struct Empty {
            name: String,
        }
        impl ValidateRequest for Empty {
            fn rules(&self) -> Vec<Rule<'_>> {
                vec![Rule::new(
                    "name",
                    Field::Text(&self.name),
                    Constraint::Required,
                )]
            }
        }

        let err: ApiError = Empty {
            name: String::new(),
        }
        .validate()
        .unwrap_err()
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "name is required");
    }
}
