use crate::core::deleter::APP_ID_PLACEHOLDER;
use crate::utils::error::{Result, SweepError};
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "teams-sweep")]
#[command(about = "Bulk-delete Teams apps listed in a JSON export")]
pub struct CliConfig {
    /// Endpoint template; '{teamsAppId}' is replaced with each app id.
    #[arg(
        long,
        env = "API_ENDPOINT",
        default_value = "https://dev.teams.microsoft.com/api/appdefinitions/{teamsAppId}"
    )]
    pub api_endpoint: String,

    /// Bearer token sent on every request. May be blank.
    #[arg(long, env = "BEARER_TOKEN", default_value = "", hide_env_values = true)]
    pub bearer_token: String,

    /// JSON file holding the exported app list.
    #[arg(long, env = "JSON_FILE_PATH", default_value = "teams_apps.json")]
    pub json_file_path: String,

    /// Pause between API calls to avoid overwhelming the server.
    #[arg(long, env = "REQUEST_DELAY_SECONDS", default_value = "1")]
    pub request_delay_seconds: u64,

    /// Timeout for each API request.
    #[arg(long, env = "REQUEST_TIMEOUT_SECONDS", default_value = "30")]
    pub request_timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if !self.api_endpoint.contains(APP_ID_PLACEHOLDER) {
            return Err(SweepError::ConfigError {
                message: format!(
                    "API endpoint must contain '{}' placeholder",
                    APP_ID_PLACEHOLDER
                ),
            });
        }
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("json_file_path", &self.json_file_path)?;
        validate_positive_number(
            "request_timeout_seconds",
            self.request_timeout_seconds,
            1,
        )?;
        Ok(())
    }
}
