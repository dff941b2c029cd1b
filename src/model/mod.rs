//! Data transfer objects shared by the HTTP API.
//!
//! Request DTOs keep every field optional, and numeric fields as raw JSON, so that
//! missing or wrongly typed values surface as validation violations instead of
//! deserialization rejections. Response DTOs mirror the JSON documents returned inside
//! the `BaseResponse` envelope.

pub mod api;
pub mod drone;
pub mod media;
