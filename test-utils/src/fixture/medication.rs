//! Medication fixtures for creating in-memory test data.

use entity::medication;

/// Default test medication name.
pub const DEFAULT_NAME: &str = "strepsils";

/// Default test medication code.
pub const DEFAULT_CODE: &str = "MED_2022";

/// Default test medication weight.
pub const DEFAULT_WEIGHT: f64 = 100.0;

/// Creates a medication entity model attached to `drone_id` with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"strepsils"`
/// - code: `"MED_2022"`
/// - weight: `100.0`
/// - image_url: `None`
pub fn entity(drone_id: i32) -> medication::Model {
    entity_builder(drone_id).build()
}

/// Creates a medication entity builder for customization.
pub fn entity_builder(drone_id: i32) -> MedicationEntityBuilder {
    MedicationEntityBuilder {
        id: 1,
        drone_id,
        name: DEFAULT_NAME.to_string(),
        code: DEFAULT_CODE.to_string(),
        weight: DEFAULT_WEIGHT,
        image_url: None,
    }
}

/// Builder for creating customized medication entity models.
pub struct MedicationEntityBuilder {
    id: i32,
    drone_id: i32,
    name: String,
    code: String,
    weight: f64,
    image_url: Option<String>,
}

impl MedicationEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    /// Builds the medication entity model.
    pub fn build(self) -> medication::Model {
        medication::Model {
            id: self.id,
            drone_id: self.drone_id,
            name: self.name,
            code: self.code,
            weight: self.weight,
            image_url: self.image_url,
        }
    }
}
