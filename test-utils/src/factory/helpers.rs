//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a drone carrying a single medication.
///
/// The drone uses the factory defaults and the medication weighs `medication_weight`.
///
/// # Arguments
/// - `db` - Database connection
/// - `weight_limit` - Weight limit of the created drone
/// - `medication_weight` - Weight of the attached medication
///
/// # Returns
/// - `Ok((drone, medication))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_loaded_drone(
    db: &DatabaseConnection,
    weight_limit: f64,
    medication_weight: f64,
) -> Result<(entity::drone::Model, entity::medication::Model), DbErr> {
    let drone = crate::factory::drone::DroneFactory::new(db)
        .weight_limit(weight_limit)
        .state("LOADED")
        .build()
        .await?;
    let medication = crate::factory::medication::MedicationFactory::new(db, drone.id)
        .weight(medication_weight)
        .build()
        .await?;

    Ok((drone, medication))
}
