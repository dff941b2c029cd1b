//! Medication factory for creating test medication entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test medications attached to a drone.
pub struct MedicationFactory<'a> {
    db: &'a DatabaseConnection,
    drone_id: i32,
    name: String,
    code: String,
    weight: f64,
    image_url: Option<String>,
}

impl<'a> MedicationFactory<'a> {
    /// Creates a new MedicationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Medication-{id}"`
    /// - code: `"MED_{id}"`
    /// - weight: `100.0`
    /// - image_url: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `drone_id` - ID of the drone carrying the medication
    pub fn new(db: &'a DatabaseConnection, drone_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            drone_id,
            name: format!("Medication-{}", id),
            code: format!("MED_{}", id),
            weight: 100.0,
            image_url: None,
        }
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

    /// Builds and inserts the medication entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::medication::Model)` - Created medication entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown drone)
    pub async fn build(self) -> Result<entity::medication::Model, DbErr> {
        entity::medication::ActiveModel {
            id: ActiveValue::NotSet,
            drone_id: ActiveValue::Set(self.drone_id),
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            weight: ActiveValue::Set(self.weight),
            image_url: ActiveValue::Set(self.image_url),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a medication with default values on the given drone.
pub async fn create_medication(
    db: &DatabaseConnection,
    drone_id: i32,
) -> Result<entity::medication::Model, DbErr> {
    MedicationFactory::new(db, drone_id).build().await
}
