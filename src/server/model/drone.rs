//! Drone domain models and parameters.
//!
//! Provides the drone model category and lifecycle state enums, the `Drone` domain
//! model with its attached medications, and the parameter types used to register and
//! load drones.

use std::fmt;

use crate::{
    model::drone::{BatteryLevelDto, DroneDto, FetchLoadedMedicationsDto},
    server::{
        error::AppError,
        model::medication::Medication,
        util::parse::parse_stored_enum,
    },
};

/// Drone weight category.
///
/// Each category caps the weight a drone of that class can be configured to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DroneModel {
    Lightweight,
    Middleweight,
    Cruiserweight,
    Heavyweight,
}

impl DroneModel {
    pub const ALL: [DroneModel; 4] = [
        DroneModel::Lightweight,
        DroneModel::Middleweight,
        DroneModel::Cruiserweight,
        DroneModel::Heavyweight,
    ];

    /// Maximum weight, in grams, a drone of this category may be configured to carry.
    pub const fn max_weight(self) -> f64 {
        match self {
            DroneModel::Lightweight => 125.0,
            DroneModel::Middleweight => 250.0,
            DroneModel::Cruiserweight => 375.0,
            DroneModel::Heavyweight => 500.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DroneModel::Lightweight => "LIGHTWEIGHT",
            DroneModel::Middleweight => "MIDDLEWEIGHT",
            DroneModel::Cruiserweight => "CRUISERWEIGHT",
            DroneModel::Heavyweight => "HEAVYWEIGHT",
        }
    }

    /// Maps a textual model name to its category, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|model| model.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for DroneModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drone lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DroneState {
    Idle,
    Loading,
    Loaded,
    Delivering,
    Delivered,
    Returning,
}

impl DroneState {
    pub const ALL: [DroneState; 6] = [
        DroneState::Idle,
        DroneState::Loading,
        DroneState::Loaded,
        DroneState::Delivering,
        DroneState::Delivered,
        DroneState::Returning,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            DroneState::Idle => "IDLE",
            DroneState::Loading => "LOADING",
            DroneState::Loaded => "LOADED",
            DroneState::Delivering => "DELIVERING",
            DroneState::Delivered => "DELIVERED",
            DroneState::Returning => "RETURNING",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Whether a drone in this state may still receive medications.
    pub const fn accepts_payload(self) -> bool {
        matches!(
            self,
            DroneState::Idle | DroneState::Loading | DroneState::Loaded
        )
    }
}

impl fmt::Display for DroneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered drone with the medications it currently carries.
#[derive(Debug, Clone, PartialEq)]
pub struct Drone {
    pub id: i32,
    pub serial_number: String,
    pub model: DroneModel,
    pub weight_limit: f64,
    /// Battery charge in percent, always within 0..=100.
    pub battery_level: i32,
    pub state: DroneState,
    pub medications: Vec<Medication>,
}

impl Drone {
    /// Total weight of all attached medications.
    pub fn loaded_weight(&self) -> f64 {
        self.medications.iter().map(|m| m.weight).sum()
    }

    /// Whether the drone can take another payload.
    ///
    /// Requires a state that accepts payloads and remaining capacity above zero.
    pub fn is_available(&self) -> bool {
        self.state.accepts_payload() && self.loaded_weight() < self.weight_limit
    }

    pub fn into_dto(self) -> DroneDto {
        DroneDto {
            id: self.id,
            serial_number: self.serial_number,
            model: self.model.as_str().to_string(),
            weight_limit: self.weight_limit,
            battery_level: self.battery_level,
            state: self.state.as_str().to_string(),
            medications: self
                .medications
                .into_iter()
                .map(Medication::into_dto)
                .collect(),
        }
    }

    pub fn into_loaded_medications_dto(self) -> FetchLoadedMedicationsDto {
        FetchLoadedMedicationsDto {
            drone_id: self.id,
            drone_serial_number: self.serial_number,
            medications: self
                .medications
                .into_iter()
                .map(Medication::into_dto)
                .collect(),
        }
    }

    pub fn into_battery_level_dto(self) -> BatteryLevelDto {
        BatteryLevelDto {
            drone_id: self.id,
            drone_serial_number: self.serial_number,
            battery_level: self.battery_level,
        }
    }

    /// Converts a drone entity and its medication entities into a domain model.
    ///
    /// # Arguments
    /// - `entity` - The drone row
    /// - `medications` - Medication rows belonging to the drone
    ///
    /// # Returns
    /// - `Ok(Drone)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStoredEnum))` - Stored model or state column
    ///   holds an unknown value
    pub fn from_entity(
        entity: entity::drone::Model,
        medications: Vec<entity::medication::Model>,
    ) -> Result<Self, AppError> {
        let model = parse_stored_enum("drone model", entity.model, DroneModel::from_name)?;
        let state = parse_stored_enum("drone state", entity.state, DroneState::from_name)?;

        Ok(Self {
            id: entity.id,
            serial_number: entity.serial_number,
            model,
            weight_limit: entity.weight_limit,
            battery_level: entity.battery_level,
            state,
            medications: medications
                .into_iter()
                .map(Medication::from_entity)
                .collect(),
        })
    }
}

/// Drone about to be inserted, before the database assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDrone {
    pub serial_number: String,
    pub model: DroneModel,
    pub weight_limit: f64,
    pub battery_level: i32,
    pub state: DroneState,
}

/// Validated parameters for registering a drone.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterDroneParams {
    pub serial_number: String,
    pub model: DroneModel,
    pub weight_limit: f64,
    pub battery_level: i32,
}

impl RegisterDroneParams {
    /// Builds the record to persist; every new drone starts out idle.
    pub fn into_new_drone(self) -> NewDrone {
        NewDrone {
            serial_number: self.serial_number,
            model: self.model,
            weight_limit: self.weight_limit,
            battery_level: self.battery_level,
            state: DroneState::Idle,
        }
    }
}

/// Validated parameters for loading a medication onto a drone.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadDroneParams {
    pub drone_serial_number: String,
    pub medication_name: String,
    pub medication_code: String,
    pub medication_weight: f64,
    pub medication_image_id: Option<i32>,
}
