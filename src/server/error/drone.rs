use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::drone::DroneState};

#[derive(Error, Debug, PartialEq)]
pub enum DroneError {
    /// A drone with this serial number is already registered.
    ///
    /// Results in a 409 Conflict response.
    #[error("drone with serial number {serial_number} already exists")]
    AlreadyExists { serial_number: String },

    /// No drone matches the requested id (and serial number, when one was given).
    ///
    /// Results in a 404 Not Found response.
    #[error("drone with id {drone_id} not found")]
    NotFound { drone_id: i32 },

    /// The drone is out on a delivery run and cannot take a new payload.
    ///
    /// Results in a 409 Conflict response.
    #[error("drone with id {drone_id} is {state} and cannot be loaded")]
    NotLoadable { drone_id: i32, state: DroneState },

    /// Attaching the medication would push the drone over its weight limit.
    ///
    /// Results in a 400 Bad Request response.
    #[error(
        "drone with id {drone_id} cannot carry {requested_total} (weight limit {weight_limit})"
    )]
    OverLoad {
        drone_id: i32,
        weight_limit: f64,
        requested_total: f64,
    },
}

impl IntoResponse for DroneError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AlreadyExists { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::NotLoadable { .. } => StatusCode::CONFLICT,
            Self::OverLoad { .. } => StatusCode::BAD_REQUEST,
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
