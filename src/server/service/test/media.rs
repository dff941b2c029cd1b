use super::fakes::FakeMediaStore;
use crate::server::{
    data::store::MediaStore,
    error::AppError,
    model::media::RegisterMediaParams,
    service::media::{MediaService, MEDIA_REGISTERED_MESSAGE},
};

/// Tests registering a media entry.
///
/// Expected: Ok with success envelope and the entry resolvable by id
#[tokio::test]
async fn registers_media() -> Result<(), AppError> {
    let store = FakeMediaStore::default();
    let service = MediaService::with_store(store.clone());

    let response = service
        .register_media(RegisterMediaParams {
            name: "pill.png".to_string(),
            url: "https://cdn.example.com/pill.png".to_string(),
        })
        .await?;

    assert_eq!(response.response_message, MEDIA_REGISTERED_MESSAGE);
    assert_eq!(response.data.url, "https://cdn.example.com/pill.png");
    let stored = store.find_by_id(response.data.id).await?.unwrap();
    assert_eq!(stored.name, "pill.png");

    Ok(())
}
