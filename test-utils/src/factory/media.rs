//! Media factory for creating test image references.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test media entities.
pub struct MediaFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    url: String,
}

impl<'a> MediaFactory<'a> {
    /// Creates a new MediaFactory with default values.
    ///
    /// Defaults:
    /// - name: `"image-{id}.png"`
    /// - url: `"https://cdn.example.com/image-{id}.png"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("image-{}.png", id),
            url: format!("https://cdn.example.com/image-{}.png", id),
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builds and inserts the media entity into the database.
    pub async fn build(self) -> Result<entity::media::Model, DbErr> {
        entity::media::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            url: ActiveValue::Set(self.url),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a media entity with default values.
pub async fn create_media(db: &DatabaseConnection) -> Result<entity::media::Model, DbErr> {
    MediaFactory::new(db).build().await
}
