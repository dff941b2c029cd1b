use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use crate::server::{
    data::store::MediaStore,
    error::AppError,
    model::media::{Media, RegisterMediaParams},
};

pub struct MediaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MediaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MediaStore for MediaRepository<'_> {
    async fn find_by_id(&self, id: i32) -> Result<Option<Media>, AppError> {
        let entity = entity::prelude::Media::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Media::from_entity))
    }

    async fn save(&self, params: RegisterMediaParams) -> Result<Media, AppError> {
        let entity = entity::media::ActiveModel {
            name: ActiveValue::Set(params.name),
            url: ActiveValue::Set(params.url),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Media::from_entity(entity))
    }
}
