//! Battery level audit repository.
//!
//! Stores one row per battery reading taken during loading or by the periodic
//! audit job.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::store::BatteryAuditRecorder,
    error::AppError,
    model::{battery_audit::BatteryAudit, drone::Drone},
};

pub struct BatteryAuditRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BatteryAuditRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BatteryAuditRecorder for BatteryAuditRepository<'_> {
    async fn record(&self, drone: &Drone) -> Result<BatteryAudit, AppError> {
        let entity = entity::battery_level_audit::ActiveModel {
            drone_id: ActiveValue::Set(drone.id),
            serial_number: ActiveValue::Set(drone.serial_number.clone()),
            battery_level: ActiveValue::Set(drone.battery_level),
            recorded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BatteryAudit::from_entity(entity))
    }

    async fn find_by_drone_id(&self, drone_id: i32) -> Result<Vec<BatteryAudit>, AppError> {
        let entities = entity::prelude::BatteryLevelAudit::find()
            .filter(entity::battery_level_audit::Column::DroneId.eq(drone_id))
            .order_by_desc(entity::battery_level_audit::Column::RecordedAt)
            .order_by_desc(entity::battery_level_audit::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(BatteryAudit::from_entity).collect())
    }
}
