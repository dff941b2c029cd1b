use super::*;

/// Tests recording a drone's battery level.
///
/// Expected: Ok with the drone's id, serial number and current battery level
#[tokio::test]
async fn records_current_battery_level() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::drone::DroneFactory::new(db)
        .battery_level(42)
        .build()
        .await?;
    let drone = DroneRepository::new(db).find_by_id(entity.id).await?.unwrap();

    let before = chrono::Utc::now();
    let audit = BatteryAuditRepository::new(db).record(&drone).await?;

    assert!(audit.id > 0);
    assert_eq!(audit.drone_id, drone.id);
    assert_eq!(audit.serial_number, drone.serial_number);
    assert_eq!(audit.battery_level, 42);
    assert!(audit.recorded_at >= before - chrono::Duration::seconds(1));

    Ok(())
}
