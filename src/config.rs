//! # config — environment-driven service configuration
//!
//! Read once at startup, after `dotenvy::dotenv()`. Everything is optional:
//! with no environment at all the service runs with forwarding disabled and
//! the placeholder project label.

/// Settings for the outbound custom-metrics client.
///
/// Present only when `MONITORING_WRITE_URL` is set; the API key is validated
/// separately so a half-configured environment fails loudly at startup
/// instead of silently at the first forwarded point.
#[derive(Debug, Clone)]
pub struct MonitoringConfig {
    /// Ingest endpoint that accepts metric points via HTTP POST.
    pub write_url: String,
    /// Bearer credential for the ingest endpoint.
    pub api_key: Option<String>,
}

/// All configuration the service reads from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Label attached to every forwarded metric point.
    pub project_id: String,
    /// Custom-metrics forwarding target; `None` disables forwarding outright.
    pub monitoring: Option<MonitoringConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        let project_id =
            std::env::var("PROJECT_ID").unwrap_or_else(|_| "demo-project".to_string());

        let monitoring = std::env::var("MONITORING_WRITE_URL").ok().map(|write_url| {
            MonitoringConfig {
                write_url,
                api_key: std::env::var("MONITORING_API_KEY").ok(),
            }
        });

        Self { project_id, monitoring }
    }
}
