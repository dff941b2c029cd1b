//! Drone factory for creating test drone entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drones with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let drone = DroneFactory::new(&db)
///     .serial_number("DRN-42")
///     .battery_level(15)
///     .build()
///     .await?;
/// ```
pub struct DroneFactory<'a> {
    db: &'a DatabaseConnection,
    serial_number: String,
    model: String,
    weight_limit: f64,
    battery_level: i32,
    state: String,
}

impl<'a> DroneFactory<'a> {
    /// Creates a new DroneFactory with default values.
    ///
    /// Defaults:
    /// - serial_number: `"DRONE-{id}"` where id is auto-incremented
    /// - model: `"HEAVYWEIGHT"`
    /// - weight_limit: `400.0`
    /// - battery_level: `100`
    /// - state: `"IDLE"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            serial_number: format!("DRONE-{}", id),
            model: "HEAVYWEIGHT".to_string(),
            weight_limit: 400.0,
            battery_level: 100,
            state: "IDLE".to_string(),
        }
    }

    pub fn serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = serial_number.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn weight_limit(mut self, weight_limit: f64) -> Self {
        self.weight_limit = weight_limit;
        self
    }

    pub fn battery_level(mut self, battery_level: i32) -> Self {
        self.battery_level = battery_level;
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Builds and inserts the drone entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::drone::Model)` - Created drone entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::drone::Model, DbErr> {
        entity::drone::ActiveModel {
            id: ActiveValue::NotSet,
            serial_number: ActiveValue::Set(self.serial_number),
            model: ActiveValue::Set(self.model),
            weight_limit: ActiveValue::Set(self.weight_limit),
            battery_level: ActiveValue::Set(self.battery_level),
            state: ActiveValue::Set(self.state),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a drone with default values.
///
/// Shorthand for `DroneFactory::new(db).build().await`.
pub async fn create_drone(db: &DatabaseConnection) -> Result<entity::drone::Model, DbErr> {
    DroneFactory::new(db).build().await
}
