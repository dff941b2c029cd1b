//! HTTP request handlers.
//!
//! Controllers validate incoming DTOs into parameter types, call the matching service,
//! and return the service's envelope as JSON. Every handler is annotated for OpenAPI
//! generation.

pub mod drone;
pub mod media;

#[cfg(test)]
mod test;
