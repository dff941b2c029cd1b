use super::fakes::{drone, FakeAuditRecorder, FakeDroneStore};
use crate::server::{error::AppError, service::battery_audit::BatteryAuditService};

/// Tests auditing every registered drone.
///
/// Expected: Ok(2) with one entry per drone carrying its battery level
#[tokio::test]
async fn records_every_drone() -> Result<(), AppError> {
    let mut low = drone(2, "low", 400.0, &[]);
    low.battery_level = 10;
    let drones = FakeDroneStore::with_drones(vec![drone(1, "full", 400.0, &[]), low]);
    let audits = FakeAuditRecorder::default();
    let service = BatteryAuditService::with_stores(drones, audits.clone());

    let recorded = service.audit_all().await?;

    assert_eq!(recorded, 2);
    let records = audits.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].battery_level, 100);
    assert_eq!(records[1].serial_number, "low");
    assert_eq!(records[1].battery_level, 10);

    Ok(())
}

/// Tests auditing when entries cannot be stored.
///
/// Expected: Ok(0), failures are not propagated
#[tokio::test]
async fn skips_failed_records() -> Result<(), AppError> {
    let drones = FakeDroneStore::with_drones(vec![drone(1, "full", 400.0, &[])]);
    let service = BatteryAuditService::with_stores(drones, FakeAuditRecorder::failing());

    assert_eq!(service.audit_all().await?, 0);

    Ok(())
}

/// Tests auditing an empty fleet.
///
/// Expected: Ok(0)
#[tokio::test]
async fn handles_empty_fleet() -> Result<(), AppError> {
    let service =
        BatteryAuditService::with_stores(FakeDroneStore::default(), FakeAuditRecorder::default());

    assert_eq!(service.audit_all().await?, 0);

    Ok(())
}
