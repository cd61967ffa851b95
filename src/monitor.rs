//! # monitor
//!
//! Best-effort forwarding of custom metric points (`latency`, `quote_count`)
//! to an external monitoring ingest endpoint.
//!
//! Forwarding is explicitly **not** part of the request contract:
//! * a transport or auth failure is logged and swallowed, never retried and
//!   never surfaced to the HTTP caller;
//! * a client that fails to initialise at startup (missing credentials)
//!   leaves forwarding disabled for the process lifetime — every subsequent
//!   `write_point` call is a no-op.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;

/// Failure while shipping one metric point.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("transport: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ingest endpoint rejected point: HTTP {status}: {body}")]
    Rejected { status: reqwest::StatusCode, body: String },
}

/// One custom metric point as the ingest endpoint expects it.
#[derive(Debug, Serialize)]
struct MetricPoint<'a> {
    metric: &'a str,
    value: f64,
    labels: BTreeMap<&'a str, &'a str>,
}

/// Configured, credentialed client for the ingest endpoint.
struct MonitoringClient {
    http: reqwest::Client,
    write_url: String,
    api_key: String,
    project_id: String,
}

impl MonitoringClient {
    async fn write_point(
        &self,
        metric: &str,
        value: f64,
        labels: &[(&str, &str)],
    ) -> Result<(), TransportError> {
        let mut all_labels = BTreeMap::from([("project_id", self.project_id.as_str())]);
        all_labels.extend(labels.iter().copied());

        let point = MetricPoint { metric, value, labels: all_labels };

        let resp = self
            .http
            .post(&self.write_url)
            .bearer_auth(&self.api_key)
            .json(&point)
            .timeout(Duration::from_secs(5))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(TransportError::Rejected { status, body });
        }

        Ok(())
    }
}

/// Handle held in `AppState`. Disabled mode carries no client at all.
pub struct Forwarder {
    client: Option<MonitoringClient>,
}

impl Forwarder {
    /// Build the forwarder from config.
    ///
    /// Initialisation failures (no endpoint configured, or an endpoint with
    /// no credential) are logged here and produce a disabled forwarder; they
    /// never abort startup.
    pub fn from_config(config: &Config) -> Self {
        let Some(monitoring) = &config.monitoring else {
            info!("custom-metrics forwarding disabled (MONITORING_WRITE_URL unset)");
            return Self { client: None };
        };

        let Some(api_key) = monitoring.api_key.clone() else {
            warn!(
                write_url = %monitoring.write_url,
                "monitoring client init failed: MONITORING_API_KEY missing; \
                 forwarding disabled for this process"
            );
            return Self { client: None };
        };

        info!(write_url = %monitoring.write_url, "custom-metrics forwarding enabled");
        Self {
            client: Some(MonitoringClient {
                http: reqwest::Client::new(),
                write_url: monitoring.write_url.clone(),
                api_key,
                project_id: config.project_id.clone(),
            }),
        }
    }

    /// Disabled forwarder, for tests and degraded startup.
    pub fn disabled() -> Self {
        Self { client: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Ship one point, swallowing all failures after logging them.
    pub async fn write_point(&self, metric: &str, value: f64, labels: &[(&str, &str)]) {
        let Some(client) = &self.client else { return };

        if let Err(e) = client.write_point(metric, value, labels).await {
            warn!(metric, error = %e, "failed to forward custom metric point");
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonitoringConfig;

    fn base_config() -> Config {
        Config { project_id: "demo-project".to_string(), monitoring: None }
    }

    #[test]
    fn test_no_endpoint_means_disabled() {
        let forwarder = Forwarder::from_config(&base_config());
        assert!(!forwarder.is_enabled());
    }

    #[test]
    fn test_missing_credential_disables_forwarding() {
        let config = Config {
            monitoring: Some(MonitoringConfig {
                write_url: "http://localhost:9999/write".to_string(),
                api_key: None,
            }),
            ..base_config()
        };

        let forwarder = Forwarder::from_config(&config);
        assert!(!forwarder.is_enabled());
    }

    #[test]
    fn test_full_config_enables_forwarding() {
        let config = Config {
            monitoring: Some(MonitoringConfig {
                write_url: "http://localhost:9999/write".to_string(),
                api_key: Some("secret".to_string()),
            }),
            ..base_config()
        };

        let forwarder = Forwarder::from_config(&config);
        assert!(forwarder.is_enabled());
    }

    #[tokio::test]
    async fn test_write_point_on_disabled_forwarder_is_noop() {
        // Must return without any network activity or panic.
        Forwarder::disabled().write_point("latency", 0.2, &[]).await;
    }

    #[tokio::test]
    async fn test_transport_failure_is_swallowed() {
        let config = Config {
            monitoring: Some(MonitoringConfig {
                // Nothing listens here; the send must fail and be swallowed.
                write_url: "http://127.0.0.1:1/write".to_string(),
                api_key: Some("secret".to_string()),
            }),
            ..base_config()
        };

        Forwarder::from_config(&config)
            .write_point("quote_count", 5.0, &[("endpoint", "/prices")])
            .await;
    }
}
