//! Request validation rules.
//!
//! `ValidationRules` is a plain value holding the field constraints for drone
//! registration, drone loading and media registration. It is constructed once at
//! startup, stored in `AppState`, and handed to controllers, which turn request DTOs
//! into validated parameter types before any service runs.
//!
//! Checking is pure: each `*_violations` method returns every failed constraint in
//! field order, and the matching conversion method fails with a `ValidationError`
//! aggregating them.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::{
    model::{
        drone::{LoadDroneDto, RegisterDroneDto},
        media::RegisterMediaDto,
    },
    server::{
        error::validation::{ValidationError, Violation},
        model::{
            drone::{DroneModel, LoadDroneParams, RegisterDroneParams},
            media::RegisterMediaParams,
        },
    },
};

pub const SERIAL_NUMBER_TOO_LONG: &str = "Serial number must be at most 100 characters";
pub const MEDICATION_NAME_INVALID: &str =
    "medication name must only contain letters, numbers, '-', or '_'";
pub const MEDICATION_CODE_INVALID: &str =
    "medication code must only contain upper case letters, numbers, or '_'";

static MEDICATION_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid medication name pattern"));
static MEDICATION_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9_]+$").expect("valid medication code pattern"));

/// Field constraints applied to incoming requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationRules {
    pub serial_number_max_length: usize,
    pub weight_limit_max: f64,
    pub battery_capacity_min: i64,
    pub battery_capacity_max: i64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            serial_number_max_length: 100,
            weight_limit_max: DroneModel::Heavyweight.max_weight(),
            battery_capacity_min: 0,
            battery_capacity_max: 100,
        }
    }
}

impl ValidationRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects every violation in a drone registration request.
    pub fn register_drone_violations(&self, dto: &RegisterDroneDto) -> Vec<Violation> {
        let mut violations = Vec::new();

        match non_blank(dto.serial_number.as_deref()) {
            None => violations.push(Violation::new("serialNumber", "Serial number is required")),
            Some(serial) if serial.chars().count() > self.serial_number_max_length => {
                violations.push(Violation::new(
                    "serialNumber",
                    format!(
                        "Serial number must be at most {} characters",
                        self.serial_number_max_length
                    ),
                ))
            }
            Some(_) => {}
        }

        match non_blank(dto.model.as_deref()) {
            None => violations.push(Violation::new("model", "Drone model is required")),
            Some(model) if DroneModel::from_name(model).is_none() => {
                let names: Vec<&str> = DroneModel::ALL.iter().map(|m| m.as_str()).collect();
                violations.push(Violation::new(
                    "model",
                    format!("Drone model must be one of {}", names.join(", ")),
                ))
            }
            Some(_) => {}
        }

        match number_field(dto.weight_limit.as_ref(), Value::as_f64) {
            Field::Missing => {
                violations.push(Violation::new("weightLimit", "Weight limit is required"))
            }
            Field::Invalid => {
                violations.push(Violation::new("weightLimit", "Weight limit must be a number"))
            }
            Field::Present(limit) if !limit.is_finite() || limit <= 0.0 => violations.push(
                Violation::new("weightLimit", "Weight limit must be greater than 0"),
            ),
            Field::Present(limit) if limit > self.weight_limit_max => {
                violations.push(Violation::new(
                    "weightLimit",
                    format!("Weight limit must be at most {}", self.weight_limit_max),
                ))
            }
            Field::Present(_) => {}
        }

        match number_field(dto.battery_capacity.as_ref(), Value::as_i64) {
            Field::Missing => violations.push(Violation::new(
                "batteryCapacity",
                "Battery capacity is required",
            )),
            Field::Invalid => violations.push(Violation::new(
                "batteryCapacity",
                "Battery capacity must be an integer",
            )),
            Field::Present(capacity)
                if capacity < self.battery_capacity_min
                    || capacity > self.battery_capacity_max =>
            {
                violations.push(Violation::new(
                    "batteryCapacity",
                    format!(
                        "Battery capacity must be between {} and {}",
                        self.battery_capacity_min, self.battery_capacity_max
                    ),
                ))
            }
            Field::Present(_) => {}
        }

        violations
    }

    /// Validates a registration request and converts it into parameters.
    ///
    /// # Returns
    /// - `Ok(RegisterDroneParams)` - Request satisfied every rule
    /// - `Err(ValidationError)` - All violations found in the request
    pub fn register_drone(
        &self,
        dto: RegisterDroneDto,
    ) -> Result<RegisterDroneParams, ValidationError> {
        let violations = self.register_drone_violations(&dto);

        match (
            dto.serial_number,
            dto.model.as_deref().and_then(DroneModel::from_name),
            dto.weight_limit.as_ref().and_then(Value::as_f64),
            dto.battery_capacity.as_ref().and_then(as_i32),
        ) {
            (Some(serial_number), Some(model), Some(weight_limit), Some(battery_level))
                if violations.is_empty() =>
            {
                Ok(RegisterDroneParams {
                    serial_number: serial_number.trim().to_string(),
                    model,
                    weight_limit,
                    battery_level,
                })
            }
            _ => Err(ValidationError(violations)),
        }
    }

    /// Collects every violation in a drone loading request.
    pub fn load_drone_violations(&self, dto: &LoadDroneDto) -> Vec<Violation> {
        let mut violations = Vec::new();

        if non_blank(dto.drone_serial_number.as_deref()).is_none() {
            violations.push(Violation::new(
                "droneSerialNumber",
                "drone serial number is required",
            ));
        }

        match dto.medication_name.as_deref() {
            None | Some("") => violations.push(Violation::new(
                "medicationName",
                "medication name is required",
            )),
            Some(name) if !is_valid_medication_name(name) => {
                violations.push(Violation::new("medicationName", MEDICATION_NAME_INVALID))
            }
            Some(_) => {}
        }

        match dto.medication_code.as_deref() {
            None | Some("") => violations.push(Violation::new(
                "medicationCode",
                "medication code is required",
            )),
            Some(code) if !is_valid_medication_code(code) => {
                violations.push(Violation::new("medicationCode", MEDICATION_CODE_INVALID))
            }
            Some(_) => {}
        }

        match number_field(dto.medication_weight.as_ref(), Value::as_f64) {
            Field::Missing => violations.push(Violation::new(
                "medicationWeight",
                "medication weight is required",
            )),
            Field::Invalid => violations.push(Violation::new(
                "medicationWeight",
                "medication weight must be a number",
            )),
            Field::Present(weight) if !weight.is_finite() || weight <= 0.0 => violations.push(
                Violation::new("medicationWeight", "medication weight must be greater than 0"),
            ),
            Field::Present(_) => {}
        }

        if let Field::Invalid = number_field(dto.medication_image_id.as_ref(), as_i32) {
            violations.push(Violation::new(
                "medicationImageId",
                "medication image id must be an integer",
            ));
        }

        violations
    }

    /// Validates a loading request and converts it into parameters.
    pub fn load_drone(&self, dto: LoadDroneDto) -> Result<LoadDroneParams, ValidationError> {
        let violations = self.load_drone_violations(&dto);

        match (
            dto.drone_serial_number,
            dto.medication_name,
            dto.medication_code,
            dto.medication_weight.as_ref().and_then(Value::as_f64),
        ) {
            (Some(serial), Some(name), Some(code), Some(weight)) if violations.is_empty() => {
                Ok(LoadDroneParams {
                    drone_serial_number: serial.trim().to_string(),
                    medication_name: name,
                    medication_code: code,
                    medication_weight: weight,
                    medication_image_id: dto.medication_image_id.as_ref().and_then(as_i32),
                })
            }
            _ => Err(ValidationError(violations)),
        }
    }

    /// Collects every violation in a media registration request.
    pub fn register_media_violations(&self, dto: &RegisterMediaDto) -> Vec<Violation> {
        let mut violations = Vec::new();

        if non_blank(dto.name.as_deref()).is_none() {
            violations.push(Violation::new("name", "media name is required"));
        }
        if non_blank(dto.url.as_deref()).is_none() {
            violations.push(Violation::new("url", "media url is required"));
        }

        violations
    }

    /// Validates a media registration request and converts it into parameters.
    pub fn register_media(
        &self,
        dto: RegisterMediaDto,
    ) -> Result<RegisterMediaParams, ValidationError> {
        let violations = self.register_media_violations(&dto);

        match (dto.name, dto.url) {
            (Some(name), Some(url)) if violations.is_empty() => Ok(RegisterMediaParams {
                name: name.trim().to_string(),
                url: url.trim().to_string(),
            }),
            _ => Err(ValidationError(violations)),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// State of an optional numeric request field.
enum Field<T> {
    Missing,
    Invalid,
    Present(T),
}

/// Reads an optional JSON field with `read`; `null` counts as missing.
fn number_field<T>(value: Option<&Value>, read: impl FnOnce(&Value) -> Option<T>) -> Field<T> {
    match value {
        None | Some(Value::Null) => Field::Missing,
        Some(value) => read(value).map_or(Field::Invalid, Field::Present),
    }
}

fn as_i32(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|v| i32::try_from(v).ok())
}

fn is_valid_medication_name(name: &str) -> bool {
    MEDICATION_NAME_PATTERN.is_match(name)
}

fn is_valid_medication_code(code: &str) -> bool {
    MEDICATION_CODE_PATTERN.is_match(code)
}
