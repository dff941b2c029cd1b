//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the store traits. They enforce the drone
//! business rules, coordinate the repositories, and wrap results in the
//! `BaseResponse` envelope returned to clients.

pub mod battery_audit;
pub mod drone;
pub mod media;

#[cfg(test)]
mod test;
