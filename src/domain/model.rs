use serde::Deserialize;
use std::fmt;

/// One entry of the exported Teams app list. Only the two fields the tool
/// cares about are mapped; everything else in the record is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AppRecord {
    #[serde(rename = "teamsAppId")]
    pub teams_app_id: Option<String>,

    #[serde(rename = "appName")]
    pub app_name: Option<String>,
}

impl AppRecord {
    pub fn display_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or("Unknown")
    }
}

/// Result of a single DELETE attempt. Every anticipated failure path maps to
/// a variant here instead of an Err, so one bad app never aborts the sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// HTTP 200, 202 or 204.
    Success(u16),
    /// The per-request timeout elapsed.
    Timeout,
    /// Transport-level failure (DNS, connect, TLS, ...).
    NetworkError(String),
    /// Any other HTTP status; body is truncated for display.
    HttpError { status: u16, body: String },
}

impl DeleteOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeleteOutcome::Success(_))
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteOutcome::Success(status) => write!(f, "Success (Status: {})", status),
            DeleteOutcome::Timeout => write!(f, "Request timed out"),
            DeleteOutcome::NetworkError(cause) => write!(f, "Network error: {}", cause),
            DeleteOutcome::HttpError { status, body } => write!(f, "HTTP {}: {}", status, body),
        }
    }
}

/// Accumulated outcomes of one sweep run. An app id lands in exactly one of
/// the two lists, so `succeeded.len() + failed.len()` equals the number of
/// attempts.
#[derive(Debug, Default)]
pub struct SweepReport {
    pub succeeded: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl SweepReport {
    pub fn record(&mut self, app_id: &str, outcome: &DeleteOutcome) {
        if outcome.is_success() {
            self.succeeded.push(app_id.to_string());
        } else {
            self.failed.push((app_id.to_string(), outcome.to_string()));
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(50));
        println!("📊 DELETION SUMMARY");
        println!("{}", "=".repeat(50));
        println!("✅ Successful deletions: {}", self.succeeded.len());
        println!("❌ Failed deletions: {}", self.failed.len());
        println!("📈 Total processed: {}", self.total());

        if !self.succeeded.is_empty() {
            println!("\n✅ Successfully deleted:");
            for app_id in &self.succeeded {
                println!("   • {}", app_id);
            }
        }

        if !self.failed.is_empty() {
            println!("\n❌ Failed to delete:");
            for (app_id, error) in &self.failed {
                println!("   • {}: {}", app_id, error);
            }
        }

        if self.failed.is_empty() {
            println!("\n🎉 All Teams apps were successfully deleted!");
        } else {
            println!(
                "\n⚠️  {} deletions failed. Please review the errors above.",
                self.failed.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_partitions_outcomes() {
        let mut report = SweepReport::default();
        report.record("a", &DeleteOutcome::Success(204));
        report.record(
            "b",
            &DeleteOutcome::HttpError {
                status: 404,
                body: "not found".to_string(),
            },
        );
        report.record("c", &DeleteOutcome::Timeout);

        assert_eq!(report.succeeded, vec!["a"]);
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.total(), 3);
        assert!(report.failed[0].1.contains("404"));
        assert!(report.failed[0].1.contains("not found"));
        assert_eq!(report.failed[1].1, "Request timed out");
    }

    #[test]
    fn test_display_name_defaults_to_unknown() {
        let record = AppRecord {
            teams_app_id: Some("id1".to_string()),
            app_name: None,
        };
        assert_eq!(record.display_name(), "Unknown");
    }
}
