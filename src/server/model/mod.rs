//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs on the way out of the service layer. Parameter types carry
//! already-validated request data into the services.

pub mod battery_audit;
pub mod drone;
pub mod media;
pub mod medication;
