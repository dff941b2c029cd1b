use super::*;

/// Tests updating a drone's state.
///
/// Verifies that the update is persisted and the returned drone carries the
/// medications currently stored for it.
///
/// Expected: Ok with state LOADED and one medication
#[tokio::test]
async fn updates_state_and_reloads_medications() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await?;
    let repo = DroneRepository::new(db);
    let mut found = repo.find_by_id(drone.id).await?.unwrap();
    let medication = factory::create_medication(db, drone.id).await?;

    found.state = DroneState::Loaded;
    found.battery_level = 64;
    let saved = repo.save(&found).await?;

    assert_eq!(saved.state, DroneState::Loaded);
    assert_eq!(saved.battery_level, 64);
    assert_eq!(saved.medications.len(), 1);
    assert_eq!(saved.medications[0].id, medication.id);

    let stored = entity::prelude::Drone::find_by_id(drone.id).one(db).await?.unwrap();
    assert_eq!(stored.state, "LOADED");
    assert_eq!(stored.battery_level, 64);

    Ok(())
}
