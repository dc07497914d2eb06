//! Periodic activity log maintenance: retention cutoff plus per-user cap.

use fa_config::ActivityLogConfig;
use fa_db::{ActivityLogRepository, Result as DbErrorResult};

use std::time::Duration;

use chrono::Utc;
use log::{error, info, warn};
use tokio::task::JoinHandle;

/// Rows removed by one cleanup pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupReport {
    pub expired: u64,
    pub pruned: u64,
}

/// One pass: drop entries older than the retention window, then trim each user
/// to the newest `max_entries_per_user`.
pub async fn run_activity_cleanup(
    repo: &ActivityLogRepository,
    config: &ActivityLogConfig,
) -> DbErrorResult<CleanupReport> {
    // A window reaching past the earliest representable date expires nothing
    let expired = match chrono::Duration::try_days(i64::from(config.retention_days))
        .and_then(|window| Utc::now().checked_sub_signed(window))
    {
        Some(cutoff) => repo.delete_older_than(cutoff).await?,
        None => {
            warn!(
                "Retention of {} days is out of range, skipping expiry",
                config.retention_days
            );
            0
        }
    };

    let mut pruned = 0;
    for user_id in repo.find_user_ids().await? {
        pruned += repo.prune_user(user_id, config.max_entries_per_user).await?;
    }

    Ok(CleanupReport { expired, pruned })
}

/// Run [`run_activity_cleanup`] now and then every `cleanup_interval_hours`.
pub fn spawn_activity_cleanup(
    repo: ActivityLogRepository,
    config: ActivityLogConfig,
) -> JoinHandle<()> {
    let period = Duration::from_secs(u64::from(config.cleanup_interval_hours.max(1)) * 3600);

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            match run_activity_cleanup(&repo, &config).await {
                Ok(report) => info!(
                    "Activity cleanup: {} expired, {} over per-user cap",
                    report.expired, report.pruned
                ),
                Err(e) => error!("Activity cleanup failed: {}", e),
            }
        }
    })
}
