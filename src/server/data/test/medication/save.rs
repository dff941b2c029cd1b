use super::*;

/// Tests inserting a medication for a drone.
///
/// Expected: Ok with assigned id and fields persisted
#[tokio::test]
async fn inserts_medication() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await?;

    let repo = MedicationRepository::new(db);
    let medication = repo
        .save(NewMedication {
            drone_id: drone.id,
            name: "strepsils".to_string(),
            code: "MED_2022".to_string(),
            weight: 120.0,
            image_url: Some("https://cdn.example.com/strepsils.png".to_string()),
        })
        .await?;

    assert!(medication.id > 0);
    assert_eq!(medication.drone_id, drone.id);
    assert_eq!(medication.code, "MED_2022");
    assert_eq!(
        medication.image_url.as_deref(),
        Some("https://cdn.example.com/strepsils.png")
    );

    let count = entity::prelude::Medication::find()
        .filter(entity::medication::Column::DroneId.eq(drone.id))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests inserting a medication without an image.
///
/// Expected: Ok with image_url None
#[tokio::test]
async fn inserts_medication_without_image() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await?;

    let repo = MedicationRepository::new(db);
    let medication = repo
        .save(NewMedication {
            drone_id: drone.id,
            name: "aspirin".to_string(),
            code: "ASP_1".to_string(),
            weight: 10.0,
            image_url: None,
        })
        .await?;

    let stored = entity::prelude::Medication::find_by_id(medication.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.image_url.is_none());

    Ok(())
}
