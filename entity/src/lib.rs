//! SeaORM entity definitions for the drones database.

pub mod prelude;

pub mod battery_level_audit;
pub mod drone;
pub mod media;
pub mod medication;
