//! Media (image reference) domain models.

use crate::model::media::MediaDto;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub id: i32,
    pub name: String,
    pub url: String,
}

impl Media {
    pub fn into_dto(self) -> MediaDto {
        MediaDto {
            id: self.id,
            name: self.name,
            url: self.url,
        }
    }

    pub fn from_entity(entity: entity::media::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            url: entity.url,
        }
    }
}

/// Validated parameters for registering a media entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterMediaParams {
    pub name: String,
    pub url: String,
}
