use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response code carried by every successful envelope.
pub const SUCCESS_RESPONSE_CODE: u16 = 200;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ViolationDto {
    pub field: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ValidationErrorDto {
    pub error: String,
    pub violations: Vec<ViolationDto>,
}

/// Body of a 400 response from an endpoint that can fail either validation or a
/// business rule.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(untagged)]
pub enum BadRequestDto {
    Validation(ValidationErrorDto),
    Error(ErrorDto),
}

/// Envelope wrapping the payload of every successful operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse<T> {
    pub response_code: u16,
    pub response_message: String,
    pub data: T,
}

impl<T> BaseResponse<T> {
    /// Wraps `data` with the success code and the given message.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            response_code: SUCCESS_RESPONSE_CODE,
            response_message: message.into(),
            data,
        }
    }
}
