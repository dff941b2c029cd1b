use super::*;

/// Tests registering media and loading a medication that references it.
///
/// Expected: the medication carries the registered url
#[tokio::test]
async fn registered_media_resolves_on_load() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let drone = factory::create_drone(db).await.unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/media",
        Some(json!({ "name": "pill.png", "url": "https://cdn.example.com/pill.png" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseMessage"], "media registered successfully");
    let media_id = body["data"]["id"].as_i64().unwrap();

    let mut payload = load_payload(&drone.serial_number, 10.0);
    payload["medicationImageId"] = json!(media_id);
    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/drones/{}/medications", drone.id),
        Some(payload),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["medications"][0]["imageUrl"],
        "https://cdn.example.com/pill.png"
    );
}

/// Tests registering media without a url.
///
/// Expected: 400 with a url violation
#[tokio::test]
async fn rejects_media_without_url() {
    let (_test, app) = setup().await;

    let (status, body) = send(&app, Method::POST, "/api/media", Some(json!({ "name": "pill.png" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["violations"][0]["field"], "url");
}
