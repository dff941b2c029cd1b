use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{BadRequestDto, BaseResponse, ErrorDto, ValidationErrorDto},
        drone::{
            BatteryAuditDto, BatteryLevelDto, DroneDto, FetchLoadedMedicationsDto, LoadDroneDto,
            RegisterDroneDto,
        },
    },
    server::{error::AppError, service::drone::DroneService, state::AppState},
};

/// Tag for grouping drone endpoints in OpenAPI documentation
pub static DRONE_TAG: &str = "drone";

/// Register a new drone.
///
/// Validates the payload and registers the drone in the `IDLE` state. Serial numbers
/// must be unique across all drones.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Drone registration data
///
/// # Returns
/// - `200 OK` - Drone registered
/// - `400 Bad Request` - Payload failed validation
/// - `409 Conflict` - Serial number already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/drones",
    tag = DRONE_TAG,
    request_body = RegisterDroneDto,
    responses(
        (status = 200, description = "Successfully registered drone", body = BaseResponse<DroneDto>),
        (status = 400, description = "Invalid drone data", body = ValidationErrorDto),
        (status = 409, description = "Serial number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_drone(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDroneDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = state.rules.register_drone(payload)?;
    let response = DroneService::new(&state.db).register_drone(params).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Load a medication onto a drone.
///
/// The serial number in the payload must belong to the drone in the path. The load is
/// rejected if the drone is out delivering or its total payload would exceed its
/// weight limit.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `drone_id` - ID of the drone to load
/// - `payload` - Medication data
///
/// # Returns
/// - `200 OK` - Medication loaded, drone is now `LOADED`
/// - `400 Bad Request` - Payload failed validation or weight limit exceeded
/// - `404 Not Found` - No drone with that id and serial number
/// - `409 Conflict` - Drone is away on a delivery run
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/drones/{drone_id}/medications",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID")
    ),
    request_body = LoadDroneDto,
    responses(
        (status = 200, description = "Successfully loaded drone", body = BaseResponse<DroneDto>),
        (status = 400, description = "Invalid medication data or weight limit exceeded", body = BadRequestDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 409, description = "Drone cannot take a payload in its current state", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn load_drone(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
    payload: Result<Json<LoadDroneDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = state.rules.load_drone(payload)?;
    let response = DroneService::new(&state.db)
        .load_drone(drone_id, params)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// List the medications loaded on a drone.
#[utoipa::path(
    get,
    path = "/api/drones/{drone_id}/medications",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Loaded medications", body = BaseResponse<FetchLoadedMedicationsDto>),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_loaded_medications(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let response = DroneService::new(&state.db)
        .get_loaded_medication(drone_id)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// List drones available for loading.
///
/// A drone is available while it is `IDLE`, `LOADING` or `LOADED` and still has
/// capacity left.
#[utoipa::path(
    get,
    path = "/api/drones/available",
    tag = DRONE_TAG,
    responses(
        (status = 200, description = "Available drones", body = BaseResponse<Vec<DroneDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_drones(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let response = DroneService::new(&state.db).get_available_drones().await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/drones/{drone_id}/battery",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Battery level of the drone", body = BaseResponse<BatteryLevelDto>),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_battery_level(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let response = DroneService::new(&state.db)
        .get_battery_level(drone_id)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// List the recorded battery levels of a drone, newest first.
#[utoipa::path(
    get,
    path = "/api/drones/{drone_id}/battery/audits",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Battery audit history", body = BaseResponse<Vec<BatteryAuditDto>>),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_battery_audits(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let response = DroneService::new(&state.db)
        .get_battery_audits(drone_id)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}
