use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::server::{
    data::store::MedicationStore,
    error::AppError,
    model::medication::{Medication, NewMedication},
};

pub struct MedicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MedicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MedicationStore for MedicationRepository<'_> {
    /// Inserts a medication attached to `medication.drone_id`.
    ///
    /// # Returns
    /// - `Ok(Medication)` - The stored medication with its assigned id
    /// - `Err(AppError::DbErr)` - Insert failed, e.g. the drone does not exist
    async fn save(&self, medication: NewMedication) -> Result<Medication, AppError> {
        let entity = entity::medication::ActiveModel {
            drone_id: ActiveValue::Set(medication.drone_id),
            name: ActiveValue::Set(medication.name),
            code: ActiveValue::Set(medication.code),
            weight: ActiveValue::Set(medication.weight),
            image_url: ActiveValue::Set(medication.image_url),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Medication::from_entity(entity))
    }
}
