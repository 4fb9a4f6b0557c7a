use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::community::CommunityService};

/// Starts the inactive community sweep
///
/// Runs at the top of every hour and deactivates communities that have not been bumped
/// (or, if never bumped, created) within the last `inactive_after_days` days.
///
/// # Arguments
/// - `db`: Database connection
/// - `inactive_after_days`: Idle period after which a community is deactivated
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler, kept for shutdown
/// - `Err(AppError::SchedulerErr)` - Job creation or scheduler start failed
pub async fn start_scheduler(
    db: DatabaseConnection,
    inactive_after_days: i64,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = sweep_inactive_communities(&db, inactive_after_days).await {
                tracing::error!("Error sweeping inactive communities: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Inactive community scheduler started (threshold: {} days)",
        inactive_after_days
    );

    Ok(scheduler)
}

/// Deactivates idle communities once
pub async fn sweep_inactive_communities(
    db: &DatabaseConnection,
    inactive_after_days: i64,
) -> Result<u64, AppError> {
    let service = CommunityService::new(db);
    let deactivated = service.deactivate_idle(inactive_after_days, Utc::now()).await?;

    if deactivated > 0 {
        tracing::info!("Deactivated {} inactive communities", deactivated);
    }

    Ok(deactivated)
}
