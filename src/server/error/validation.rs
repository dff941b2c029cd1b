use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ValidationErrorDto, ViolationDto};

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON name of the offending field
    pub field: &'static str,
    /// Human-readable message shown to the client
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn into_dto(self) -> ViolationDto {
        ViolationDto {
            field: self.field.to_string(),
            message: self.message,
        }
    }
}

/// Aggregate of every violation found in one request.
#[derive(Error, Debug, PartialEq)]
#[error("validation failed: {}", join_messages(.0))]
pub struct ValidationError(pub Vec<Violation>);

fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDto {
                error: "validation failed".to_string(),
                violations: self.0.into_iter().map(Violation::into_dto).collect(),
            }),
        )
            .into_response()
    }
}
