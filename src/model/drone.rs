use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Default, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDroneDto {
    pub serial_number: Option<String>,
    /// One of LIGHTWEIGHT, MIDDLEWEIGHT, CRUISERWEIGHT, HEAVYWEIGHT (case-insensitive).
    pub model: Option<String>,
    /// Kept as raw JSON so a non-numeric value is reported as a violation.
    #[schema(value_type = Option<f64>)]
    pub weight_limit: Option<Value>,
    /// Integer percentage; fractional values are rejected during validation.
    #[schema(value_type = Option<i64>)]
    pub battery_capacity: Option<Value>,
}

#[derive(Serialize, Deserialize, Default, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoadDroneDto {
    pub drone_serial_number: Option<String>,
    pub medication_name: Option<String>,
    pub medication_code: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub medication_weight: Option<Value>,
    /// Id returned by media registration.
    #[schema(value_type = Option<i32>)]
    pub medication_image_id: Option<Value>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicationDto {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub weight: f64,
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DroneDto {
    pub id: i32,
    pub serial_number: String,
    pub model: String,
    pub weight_limit: f64,
    pub battery_level: i32,
    pub state: String,
    pub medications: Vec<MedicationDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FetchLoadedMedicationsDto {
    pub drone_id: i32,
    pub drone_serial_number: String,
    pub medications: Vec<MedicationDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatteryLevelDto {
    pub drone_id: i32,
    pub drone_serial_number: String,
    pub battery_level: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatteryAuditDto {
    pub id: i32,
    pub drone_id: i32,
    pub drone_serial_number: String,
    pub battery_level: i32,
    pub recorded_at: DateTime<Utc>,
}
