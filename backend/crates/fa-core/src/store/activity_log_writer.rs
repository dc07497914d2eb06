use crate::ActivityLog;

use async_trait::async_trait;

/// Sink for activity feed entries. Passed explicitly to whoever records activity.
#[async_trait]
pub trait ActivityLogWriter: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn record(&self, entry: &ActivityLog) -> Result<(), Self::Error>;
}
