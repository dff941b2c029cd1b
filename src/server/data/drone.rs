//! Drone data repository for database operations.
//!
//! This module provides the `DroneRepository` for managing drone records. Medications
//! are loaded alongside each drone so the domain model always reflects the current
//! payload.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, SqlErr,
};

use crate::server::{
    data::store::DroneStore,
    error::{drone::DroneError, AppError},
    model::drone::{Drone, NewDrone},
};

/// Repository providing database operations for drones.
pub struct DroneRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneRepository<'a> {
    /// Creates a new DroneRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DroneRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the medications attached to a drone, ordered by id.
    async fn medications_of(
        &self,
        drone_id: i32,
    ) -> Result<Vec<entity::medication::Model>, AppError> {
        let medications = entity::prelude::Medication::find()
            .filter(entity::medication::Column::DroneId.eq(drone_id))
            .order_by_asc(entity::medication::Column::Id)
            .all(self.db)
            .await?;

        Ok(medications)
    }
}

#[async_trait]
impl DroneStore for DroneRepository<'_> {
    async fn exists_by_serial_number(&self, serial_number: &str) -> Result<bool, AppError> {
        let count = entity::prelude::Drone::find()
            .filter(entity::drone::Column::SerialNumber.eq(serial_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    async fn exists_by_serial_number_and_id(
        &self,
        serial_number: &str,
        id: i32,
    ) -> Result<bool, AppError> {
        let count = entity::prelude::Drone::find()
            .filter(entity::drone::Column::Id.eq(id))
            .filter(entity::drone::Column::SerialNumber.eq(serial_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Drone>, AppError> {
        let Some(drone) = entity::prelude::Drone::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let medications = self.medications_of(id).await?;

        Ok(Some(Drone::from_entity(drone, medications)?))
    }

    async fn find_with_medications_by_id(&self, id: i32) -> Result<Option<Drone>, AppError> {
        let rows = entity::prelude::Drone::find_by_id(id)
            .find_with_related(entity::prelude::Medication)
            .all(self.db)
            .await?;

        match rows.into_iter().next() {
            Some((drone, mut medications)) => {
                medications.sort_by_key(|m| m.id);
                Ok(Some(Drone::from_entity(drone, medications)?))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Drone>, AppError> {
        let rows = entity::prelude::Drone::find()
            .order_by_asc(entity::drone::Column::Id)
            .find_with_related(entity::prelude::Medication)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(drone, mut medications)| {
                medications.sort_by_key(|m| m.id);
                Drone::from_entity(drone, medications)
            })
            .collect()
    }

    /// Inserts a drone. A serial number that is already stored, including one
    /// committed by a concurrent request after the caller's existence check, is
    /// reported as `DroneError::AlreadyExists`.
    async fn create(&self, drone: NewDrone) -> Result<Drone, AppError> {
        let serial_number = drone.serial_number.clone();
        let entity = entity::drone::ActiveModel {
            serial_number: ActiveValue::Set(drone.serial_number),
            model: ActiveValue::Set(drone.model.as_str().to_string()),
            weight_limit: ActiveValue::Set(drone.weight_limit),
            battery_level: ActiveValue::Set(drone.battery_level),
            state: ActiveValue::Set(drone.state.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::from(DroneError::AlreadyExists { serial_number })
            }
            _ => AppError::from(err),
        })?;

        Drone::from_entity(entity, Vec::new())
    }

    async fn save(&self, drone: &Drone) -> Result<Drone, AppError> {
        let entity = entity::drone::ActiveModel {
            id: ActiveValue::Unchanged(drone.id),
            serial_number: ActiveValue::Set(drone.serial_number.clone()),
            model: ActiveValue::Set(drone.model.as_str().to_string()),
            weight_limit: ActiveValue::Set(drone.weight_limit),
            battery_level: ActiveValue::Set(drone.battery_level),
            state: ActiveValue::Set(drone.state.as_str().to_string()),
        }
        .update(self.db)
        .await?;

        let medications = self.medications_of(drone.id).await?;

        Drone::from_entity(entity, medications)
    }
}
