use super::*;

/// Tests finding a drone with its medications.
///
/// Verifies that stored model and state strings are parsed and medications are
/// returned in insertion order.
///
/// Expected: Ok(Some(drone)) with two medications
#[tokio::test]
async fn finds_drone_with_medications() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::drone::DroneFactory::new(db)
        .model("LIGHTWEIGHT")
        .weight_limit(120.0)
        .state("LOADING")
        .build()
        .await?;
    let first = factory::create_medication(db, drone.id).await?;
    let second = factory::medication::MedicationFactory::new(db, drone.id)
        .weight(15.5)
        .build()
        .await?;

    let repo = DroneRepository::new(db);
    let found = repo.find_by_id(drone.id).await?.unwrap();

    assert_eq!(found.id, drone.id);
    assert_eq!(found.model, DroneModel::Lightweight);
    assert_eq!(found.state, DroneState::Loading);
    assert_eq!(found.weight_limit, 120.0);
    let ids: Vec<i32> = found.medications.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(found.loaded_weight(), 115.5);

    Ok(())
}

/// Tests finding a drone that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);
    assert!(repo.find_by_id(42).await?.is_none());
    assert!(repo.find_with_medications_by_id(42).await?.is_none());

    Ok(())
}

/// Tests the joined lookup used by the medication listing.
///
/// Verifies that only the requested drone's medications are returned.
///
/// Expected: Ok(Some(drone)) with its own medication only
#[tokio::test]
async fn joined_lookup_returns_only_own_medications() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (drone, medication) = factory::helpers::create_loaded_drone(db, 400.0, 120.0).await?;
    let (_other, _) = factory::helpers::create_loaded_drone(db, 400.0, 80.0).await?;

    let repo = DroneRepository::new(db);
    let found = repo.find_with_medications_by_id(drone.id).await?.unwrap();

    assert_eq!(found.state, DroneState::Loaded);
    assert_eq!(found.medications.len(), 1);
    assert_eq!(found.medications[0].id, medication.id);
    assert_eq!(found.medications[0].weight, 120.0);

    Ok(())
}

/// Tests a drone row holding a state outside the known set.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_state() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::drone::DroneFactory::new(db)
        .state("CHARGING")
        .build()
        .await?;

    let repo = DroneRepository::new(db);
    let result = repo.find_by_id(drone.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
