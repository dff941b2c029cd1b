use crate::server::{
    data::{
        battery_audit::BatteryAuditRepository,
        drone::DroneRepository,
        store::{BatteryAuditRecorder, DroneStore},
    },
    error::AppError,
};
use test_utils::{builder::TestBuilder, factory};

mod find_by_drone_id;
mod record;
