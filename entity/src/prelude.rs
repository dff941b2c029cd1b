pub use super::battery_level_audit::Entity as BatteryLevelAudit;
pub use super::drone::Entity as Drone;
pub use super::media::Entity as Media;
pub use super::medication::Entity as Medication;
