//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic. Each repository implements one of the
//! store traits in `store`, which is what the services are written against.

pub mod battery_audit;
pub mod drone;
pub mod media;
pub mod medication;
pub mod store;

#[cfg(test)]
mod test;
