use super::*;

/// Tests registering a media entry.
///
/// Expected: Ok with assigned id and the given name and url
#[tokio::test]
async fn inserts_media() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MediaRepository::new(db);
    let media = repo
        .save(RegisterMediaParams {
            name: "pill.png".to_string(),
            url: "https://cdn.example.com/pill.png".to_string(),
        })
        .await?;

    assert!(media.id > 0);
    assert_eq!(media.name, "pill.png");
    assert_eq!(repo.find_by_id(media.id).await?, Some(media));

    Ok(())
}
