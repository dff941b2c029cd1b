use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::battery_audit::BatteryAuditService};

/// Starts the battery audit scheduler
///
/// On every tick of `schedule` the current battery level of each registered drone is
/// recorded. Drones below the low battery threshold are logged as warnings.
///
/// # Arguments
/// - `db`: Database connection
/// - `schedule`: Six-field cron expression, seconds first
pub async fn start_scheduler(db: DatabaseConnection, schedule: &str) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            match BatteryAuditService::new(&db).audit_all().await {
                Ok(recorded) => tracing::debug!("Battery audit recorded {} drones", recorded),
                Err(e) => tracing::error!("Error auditing drone battery levels: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Battery audit scheduler started with schedule '{}'", schedule);

    Ok(())
}
