use super::*;

fn new_drone(serial_number: &str) -> NewDrone {
    NewDrone {
        serial_number: serial_number.to_string(),
        model: DroneModel::Middleweight,
        weight_limit: 200.0,
        battery_level: 80,
        state: DroneState::Idle,
    }
}

/// Tests inserting a new drone.
///
/// Expected: Ok with assigned id and no medications
#[tokio::test]
async fn inserts_drone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);
    let drone = repo.create(new_drone("DRN-100")).await?;

    assert!(drone.id > 0);
    assert_eq!(drone.serial_number, "DRN-100");
    assert_eq!(drone.model, DroneModel::Middleweight);
    assert_eq!(drone.state, DroneState::Idle);
    assert!(drone.medications.is_empty());

    let stored = entity::prelude::Drone::find_by_id(drone.id).one(db).await?.unwrap();
    assert_eq!(stored.model, "MIDDLEWEIGHT");
    assert_eq!(stored.state, "IDLE");
    assert_eq!(stored.battery_level, 80);

    Ok(())
}

/// Tests the unique constraint on serial numbers.
///
/// Expected: Err(AlreadyExists) for the second insert and a single row stored
#[tokio::test]
async fn rejects_duplicate_serial_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);
    repo.create(new_drone("DRN-100")).await?;
    let result = repo.create(new_drone("DRN-100")).await;

    assert!(matches!(
        result,
        Err(AppError::DroneErr(DroneError::AlreadyExists { ref serial_number }))
            if serial_number == "DRN-100"
    ));
    assert_eq!(entity::prelude::Drone::find().count(db).await?, 1);

    Ok(())
}
