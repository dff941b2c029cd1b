use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{BaseResponse, ErrorDto, ValidationErrorDto},
        media::{MediaDto, RegisterMediaDto},
    },
    server::{error::AppError, service::media::MediaService, state::AppState},
};

/// Tag for grouping media endpoints in OpenAPI documentation
pub static MEDIA_TAG: &str = "media";

/// Register an image reference.
///
/// The returned id can be passed as `medicationImageId` when loading a drone.
///
/// # Returns
/// - `200 OK` - Media registered
/// - `400 Bad Request` - Name or url missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/media",
    tag = MEDIA_TAG,
    request_body = RegisterMediaDto,
    responses(
        (status = 200, description = "Successfully registered media", body = BaseResponse<MediaDto>),
        (status = 400, description = "Invalid media data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_media(
    State(state): State<AppState>,
    payload: Result<Json<RegisterMediaDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = state.rules.register_media(payload)?;
    let response = MediaService::new(&state.db).register_media(params).await?;

    Ok((StatusCode::OK, Json(response)))
}
