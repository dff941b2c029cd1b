//! Periodic battery level auditing.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        battery_audit::BatteryAuditRepository,
        drone::DroneRepository,
        store::{BatteryAuditRecorder, DroneStore},
    },
    error::AppError,
    model::battery_audit::LOW_BATTERY_THRESHOLD,
};

/// Service recording battery snapshots for the whole fleet.
pub struct BatteryAuditService<D, A> {
    drones: D,
    audits: A,
}

impl<'a> BatteryAuditService<DroneRepository<'a>, BatteryAuditRepository<'a>> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_stores(DroneRepository::new(db), BatteryAuditRepository::new(db))
    }
}

impl<D: DroneStore, A: BatteryAuditRecorder> BatteryAuditService<D, A> {
    pub fn with_stores(drones: D, audits: A) -> Self {
        Self { drones, audits }
    }

    /// Records the battery level of every drone.
    ///
    /// A failed insert for one drone is logged and does not stop the others.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of snapshots recorded
    /// - `Err(AppError::DbErr)` - Drones could not be listed
    pub async fn audit_all(&self) -> Result<usize, AppError> {
        let drones = self.drones.find_all().await?;
        let mut recorded = 0;

        for drone in &drones {
            if drone.battery_level < LOW_BATTERY_THRESHOLD {
                tracing::warn!(
                    "Drone {} battery at {}%",
                    drone.serial_number,
                    drone.battery_level
                );
            }

            match self.audits.record(drone).await {
                Ok(_) => recorded += 1,
                Err(e) => tracing::error!(
                    "Failed to record battery level for drone {}: {}",
                    drone.id,
                    e
                ),
            }
        }

        tracing::debug!("Recorded battery levels for {} of {} drones", recorded, drones.len());

        Ok(recorded)
    }
}
