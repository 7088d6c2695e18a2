use crate::domain::model::DeleteOutcome;
use crate::domain::ports::DeleteApi;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

pub const APP_ID_PLACEHOLDER: &str = "{teamsAppId}";

/// Display limit for error response bodies.
const BODY_SNIPPET_LEN: usize = 200;

/// Builds the concrete URL for one app. Plain substring substitution, no
/// URL-encoding; exported app ids are already URL-safe.
pub fn substitute_app_id(endpoint: &str, teams_app_id: &str) -> String {
    endpoint.replace(APP_ID_PLACEHOLDER, teams_app_id)
}

fn truncate_body(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}

/// Client for the app-definitions endpoint. One DELETE per app, bearer auth,
/// per-request timeout.
pub struct TeamsApi {
    client: Client,
    endpoint: String,
    bearer_token: String,
    timeout: Duration,
}

impl TeamsApi {
    pub fn new(endpoint: String, bearer_token: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            bearer_token,
            timeout,
        }
    }
}

#[async_trait]
impl DeleteApi for TeamsApi {
    async fn delete_app(&self, teams_app_id: &str) -> DeleteOutcome {
        let url = substitute_app_id(&self.endpoint, teams_app_id);
        tracing::debug!("DELETE {}", url);

        let result = self
            .client
            .delete(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.bearer_token))
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status().as_u16();
                tracing::debug!("API response status: {}", status);
                match status {
                    200 | 202 | 204 => DeleteOutcome::Success(status),
                    _ => {
                        let body = response.text().await.unwrap_or_default();
                        DeleteOutcome::HttpError {
                            status,
                            body: truncate_body(&body, BODY_SNIPPET_LEN),
                        }
                    }
                }
            }
            Err(e) if e.is_timeout() => DeleteOutcome::Timeout,
            Err(e) => DeleteOutcome::NetworkError(e.to_string()),
        }
    }
}
