//! Medication domain models.

use crate::model::drone::MedicationDto;

/// Medication attached to a drone.
#[derive(Debug, Clone, PartialEq)]
pub struct Medication {
    pub id: i32,
    pub drone_id: i32,
    pub name: String,
    pub code: String,
    pub weight: f64,
    /// Resolved image URL, absent when no image was given or it could not be resolved.
    pub image_url: Option<String>,
}

impl Medication {
    pub fn into_dto(self) -> MedicationDto {
        MedicationDto {
            id: self.id,
            name: self.name,
            code: self.code,
            weight: self.weight,
            image_url: self.image_url,
        }
    }

    pub fn from_entity(entity: entity::medication::Model) -> Self {
        Self {
            id: entity.id,
            drone_id: entity.drone_id,
            name: entity.name,
            code: entity.code,
            weight: entity.weight,
            image_url: entity.image_url,
        }
    }
}

/// Medication about to be inserted for a drone.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMedication {
    pub drone_id: i32,
    pub name: String,
    pub code: String,
    pub weight: f64,
    pub image_url: Option<String>,
}
