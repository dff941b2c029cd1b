use super::*;

/// Tests finding registered media by id.
///
/// Expected: Ok(Some(media)) with matching url
#[tokio::test]
async fn finds_media() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let media = factory::media::MediaFactory::new(db)
        .url("https://cdn.example.com/pill.png")
        .build()
        .await?;

    let repo = MediaRepository::new(db);
    let found = repo.find_by_id(media.id).await?.unwrap();

    assert_eq!(found.id, media.id);
    assert_eq!(found.url, "https://cdn.example.com/pill.png");

    Ok(())
}

/// Tests finding media that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_media(db).await?;

    let repo = MediaRepository::new(db);
    assert!(repo.find_by_id(999).await?.is_none());

    Ok(())
}
