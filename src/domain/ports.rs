use crate::domain::model::DeleteOutcome;
use async_trait::async_trait;

/// Seam between the sweep loop and the remote API, so the engine can be
/// driven against a scripted fake in tests.
#[async_trait]
pub trait DeleteApi: Send + Sync {
    async fn delete_app(&self, teams_app_id: &str) -> DeleteOutcome;
}
