use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Default collection host for outgoing hits.
pub const DEFAULT_ENDPOINT: &str = "https://www.google-analytics.com";

/// Session-wide tracker settings applied to every outgoing hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Destination property identifier (`tid`). Stored verbatim, never
    /// validated against a format.
    pub tracking_id: String,

    /// Data source of the hit (`ds`), e.g. "app" or "web".
    #[serde(default)]
    pub data_source: Option<String>,

    /// Application name (`an`).
    #[serde(default)]
    pub application_name: Option<String>,

    /// Application identifier (`aid`).
    #[serde(default)]
    pub application_id: Option<String>,

    /// Application version (`av`).
    #[serde(default)]
    pub application_version: Option<String>,

    /// Application installer identifier (`aiid`).
    #[serde(default)]
    pub application_installer_id: Option<String>,

    /// Stored for API completeness; no `aip` parameter is emitted. The
    /// protocol defines one, but wiring it up is a product decision that
    /// has not been taken yet.
    #[serde(default)]
    pub anonymize_ip: bool,

    /// Base URL of the collection host. Overridable mainly so tests can
    /// point the tracker at a local capture server.
    #[serde(default = "TrackerConfig::default_endpoint")]
    pub endpoint: String,
}

impl TrackerConfig {
    fn default_endpoint() -> String {
        DEFAULT_ENDPOINT.to_string()
    }

    pub fn new(tracking_id: impl Into<String>) -> Self {
        Self {
            tracking_id: tracking_id.into(),
            data_source: None,
            application_name: None,
            application_id: None,
            application_version: None,
            application_installer_id: None,
            anonymize_ip: false,
            endpoint: Self::default_endpoint(),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let tracking_id =
            std::env::var("GA_TRACKING_ID").context("GA_TRACKING_ID must be set")?;

        let mut config = Self::new(tracking_id);
        config.data_source = env_opt("GA_DATA_SOURCE");
        config.application_name = env_opt("GA_APP_NAME");
        config.application_id = env_opt("GA_APP_ID");
        config.application_version = env_opt("GA_APP_VERSION");
        config.application_installer_id = env_opt("GA_APP_INSTALLER_ID");

        config.anonymize_ip = std::env::var("GA_ANONYMIZE_IP")
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false);

        if let Some(endpoint) = env_opt("GA_ENDPOINT") {
            config.endpoint = endpoint;
        }

        Ok(config)
    }
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
