use super::*;

/// Tests listing the audit entries of a drone.
///
/// Verifies that entries of other drones are excluded and the newest entry comes
/// first.
///
/// Expected: Ok with two entries, newest first
#[tokio::test]
async fn lists_entries_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_drone(db).await?;
    let second = factory::create_drone(db).await?;
    let drones = DroneRepository::new(db);
    let mut drone = drones.find_by_id(first.id).await?.unwrap();
    let other = drones.find_by_id(second.id).await?.unwrap();

    let repo = BatteryAuditRepository::new(db);
    let older = repo.record(&drone).await?;
    drone.battery_level = 90;
    let newer = repo.record(&drone).await?;
    repo.record(&other).await?;

    let audits = repo.find_by_drone_id(first.id).await?;

    assert_eq!(audits.len(), 2);
    assert_eq!(audits[0].id, newer.id);
    assert_eq!(audits[0].battery_level, 90);
    assert_eq!(audits[1].id, older.id);

    Ok(())
}

/// Tests listing audits of a drone that was never audited.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_entries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::create_drone(db).await?;

    let repo = BatteryAuditRepository::new(db);
    assert!(repo.find_by_drone_id(drone.id).await?.is_empty());

    Ok(())
}
