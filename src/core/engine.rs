use crate::domain::model::SweepReport;
use crate::domain::ports::DeleteApi;
use std::time::Duration;

/// Drives one sweep: strictly sequential, one attempt per app id, a fixed
/// pause between attempts. There are no retries; re-running the tool
/// re-attempts every id in the file.
pub struct SweepEngine<D: DeleteApi> {
    api: D,
    delay: Duration,
}

impl<D: DeleteApi> SweepEngine<D> {
    pub fn new(api: D, delay: Duration) -> Self {
        Self { api, delay }
    }

    pub async fn run(&self, app_ids: &[String]) -> SweepReport {
        let mut report = SweepReport::default();
        let total = app_ids.len();

        for (i, app_id) in app_ids.iter().enumerate() {
            println!("\n[{:2}/{}] Processing: {}", i + 1, total, app_id);

            let outcome = self.api.delete_app(app_id).await;
            if outcome.is_success() {
                println!("✅ {}", outcome);
            } else {
                println!("❌ {}", outcome);
            }
            report.record(app_id, &outcome);

            // Pause between calls, but not after the last one.
            if i + 1 < total {
                tokio::time::sleep(self.delay).await;
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DeleteOutcome;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted fake: returns the next outcome in the list and records the
    /// ids it was called with.
    struct ScriptedApi {
        outcomes: Mutex<Vec<DeleteOutcome>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedApi {
        fn new(mut outcomes: Vec<DeleteOutcome>) -> Self {
            outcomes.reverse();
            Self {
                outcomes: Mutex::new(outcomes),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl DeleteApi for ScriptedApi {
        async fn delete_app(&self, teams_app_id: &str) -> DeleteOutcome {
            self.calls.lock().unwrap().push(teams_app_id.to_string());
            self.outcomes.lock().unwrap().pop().unwrap()
        }
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_every_id_attempted_once_in_order() {
        let api = ScriptedApi::new(vec![
            DeleteOutcome::Success(204),
            DeleteOutcome::Success(200),
            DeleteOutcome::Timeout,
        ]);
        let engine = SweepEngine::new(api, Duration::ZERO);

        let report = engine.run(&ids(&["a", "b", "c"])).await;

        assert_eq!(report.total(), 3);
        assert_eq!(report.succeeded, vec!["a", "b"]);
        assert_eq!(report.failed, vec![("c".to_string(), "Request timed out".to_string())]);
        assert_eq!(*engine.api.calls.lock().unwrap(), ids(&["a", "b", "c"]));
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_the_sweep() {
        let api = ScriptedApi::new(vec![
            DeleteOutcome::HttpError {
                status: 404,
                body: "not found".to_string(),
            },
            DeleteOutcome::Success(202),
        ]);
        let engine = SweepEngine::new(api, Duration::ZERO);

        let report = engine.run(&ids(&["a", "b"])).await;

        assert_eq!(report.succeeded, vec!["b"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.total(), 2);
    }

    #[tokio::test]
    async fn test_empty_id_list_issues_no_calls() {
        let api = ScriptedApi::new(vec![]);
        let engine = SweepEngine::new(api, Duration::ZERO);

        let report = engine.run(&[]).await;

        assert_eq!(report.total(), 0);
        assert!(engine.api.calls.lock().unwrap().is_empty());
    }
}
