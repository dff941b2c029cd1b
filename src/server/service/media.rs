use sea_orm::DatabaseConnection;

use crate::{
    model::{api::BaseResponse, media::MediaDto},
    server::{
        data::{media::MediaRepository, store::MediaStore},
        error::AppError,
        model::media::RegisterMediaParams,
    },
};

pub const MEDIA_REGISTERED_MESSAGE: &str = "media registered successfully";

/// Service for registering image references medications can point to.
pub struct MediaService<I> {
    media: I,
}

impl<'a> MediaService<MediaRepository<'a>> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_store(MediaRepository::new(db))
    }
}

impl<I: MediaStore> MediaService<I> {
    pub fn with_store(media: I) -> Self {
        Self { media }
    }

    pub async fn register_media(
        &self,
        params: RegisterMediaParams,
    ) -> Result<BaseResponse<MediaDto>, AppError> {
        let media = self.media.save(params).await?;

        tracing::info!("Registered media {} with id {}", media.name, media.id);

        Ok(BaseResponse::success(MEDIA_REGISTERED_MESSAGE, media.into_dto()))
    }
}
