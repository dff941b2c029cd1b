//! Store traits the services depend on.
//!
//! The SeaORM repositories in this module's siblings implement these traits for
//! production use; tests substitute in-memory implementations.
//!
//! # Thread Safety
//! Implementations must be `Send + Sync` to be used from axum handlers and the
//! audit scheduler.

use async_trait::async_trait;

use crate::server::{
    error::AppError,
    model::{
        battery_audit::BatteryAudit,
        drone::{Drone, NewDrone},
        media::{Media, RegisterMediaParams},
        medication::{Medication, NewMedication},
    },
};

/// Persistence operations on drones.
#[async_trait]
pub trait DroneStore: Send + Sync {
    /// Whether any drone uses `serial_number`.
    async fn exists_by_serial_number(&self, serial_number: &str) -> Result<bool, AppError>;

    /// Whether the drone `id` exists and has `serial_number`.
    async fn exists_by_serial_number_and_id(
        &self,
        serial_number: &str,
        id: i32,
    ) -> Result<bool, AppError>;

    /// Finds a drone and its attached medications by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Drone>, AppError>;

    /// Finds a drone joined with its medications in a single query.
    async fn find_with_medications_by_id(&self, id: i32) -> Result<Option<Drone>, AppError>;

    /// Returns every registered drone with its medications, ordered by id.
    async fn find_all(&self) -> Result<Vec<Drone>, AppError>;

    /// Inserts a new drone and returns it with its assigned id.
    async fn create(&self, drone: NewDrone) -> Result<Drone, AppError>;

    /// Writes the drone's mutable columns and returns the stored drone with its
    /// current medications.
    async fn save(&self, drone: &Drone) -> Result<Drone, AppError>;
}

/// Persistence operations on medications.
#[async_trait]
pub trait MedicationStore: Send + Sync {
    async fn save(&self, medication: NewMedication) -> Result<Medication, AppError>;
}

/// Lookup and registration of image references.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Media>, AppError>;

    async fn save(&self, params: RegisterMediaParams) -> Result<Media, AppError>;
}

/// Records battery level snapshots of drones.
#[async_trait]
pub trait BatteryAuditRecorder: Send + Sync {
    /// Stores the drone's current battery level with the current timestamp.
    async fn record(&self, drone: &Drone) -> Result<BatteryAudit, AppError>;

    /// Returns the snapshots of a drone, newest first.
    async fn find_by_drone_id(&self, drone_id: i32) -> Result<Vec<BatteryAudit>, AppError>;
}
