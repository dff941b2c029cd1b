//! Battery level audit domain models.

use chrono::{DateTime, Utc};

use crate::model::drone::BatteryAuditDto;

/// Battery level below which the audit job warns about a drone.
pub const LOW_BATTERY_THRESHOLD: i32 = 25;

/// Snapshot of a drone's battery level at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryAudit {
    pub id: i32,
    pub drone_id: i32,
    pub serial_number: String,
    pub battery_level: i32,
    pub recorded_at: DateTime<Utc>,
}

impl BatteryAudit {
    pub fn into_dto(self) -> BatteryAuditDto {
        BatteryAuditDto {
            id: self.id,
            drone_id: self.drone_id,
            drone_serial_number: self.serial_number,
            battery_level: self.battery_level,
            recorded_at: self.recorded_at,
        }
    }

    pub fn from_entity(entity: entity::battery_level_audit::Model) -> Self {
        Self {
            id: entity.id,
            drone_id: entity.drone_id,
            serial_number: entity.serial_number,
            battery_level: entity.battery_level,
            recorded_at: entity.recorded_at,
        }
    }
}
