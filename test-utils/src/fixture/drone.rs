//! Drone fixtures for creating in-memory test data.

use entity::drone;

/// Default test drone serial number.
pub const DEFAULT_SERIAL_NUMBER: &str = "loremipsum";

/// Default test drone model.
pub const DEFAULT_MODEL: &str = "HEAVYWEIGHT";

/// Default test drone weight limit.
pub const DEFAULT_WEIGHT_LIMIT: f64 = 400.0;

/// Default test drone battery level.
pub const DEFAULT_BATTERY_LEVEL: i32 = 100;

/// Default test drone state.
pub const DEFAULT_STATE: &str = "IDLE";

/// Creates a drone entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - serial_number: `"loremipsum"`
/// - model: `"HEAVYWEIGHT"`
/// - weight_limit: `400.0`
/// - battery_level: `100`
/// - state: `"IDLE"`
pub fn entity() -> drone::Model {
    entity_builder().build()
}

/// Creates a drone entity builder for customization.
pub fn entity_builder() -> DroneEntityBuilder {
    DroneEntityBuilder::default()
}

/// Builder for creating customized drone entity models.
pub struct DroneEntityBuilder {
    id: i32,
    serial_number: String,
    model: String,
    weight_limit: f64,
    battery_level: i32,
    state: String,
}

impl Default for DroneEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            serial_number: DEFAULT_SERIAL_NUMBER.to_string(),
            model: DEFAULT_MODEL.to_string(),
            weight_limit: DEFAULT_WEIGHT_LIMIT,
            battery_level: DEFAULT_BATTERY_LEVEL,
            state: DEFAULT_STATE.to_string(),
        }
    }
}

impl DroneEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
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

    /// Builds the drone entity model.
    pub fn build(self) -> drone::Model {
        drone::Model {
            id: self.id,
            serial_number: self.serial_number,
            model: self.model,
            weight_limit: self.weight_limit,
            battery_level: self.battery_level,
            state: self.state,
        }
    }
}
