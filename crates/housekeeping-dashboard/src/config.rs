/*
[INPUT]:  Built-in defaults, optional YAML file, HOUSEKEEPING_* environment variables
[OUTPUT]: Validated dashboard configuration
[POS]:    Configuration layer - service endpoint, timeouts, token mode, logging
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use housekeeping_adapter::{AccessToken, ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use url::Url;

pub const ENV_PREFIX: &str = "HOUSEKEEPING";

/// Top-level configuration for the dashboard
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Task Service base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Block task loading until an access token is supplied
    #[serde(default)]
    pub require_token: bool,
    /// Access token applied at startup
    #[serde(default)]
    pub token: Option<String>,
    /// tracing filter directive (e.g. "info", "housekeeping_adapter=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory for daily-rolling log files
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            require_token: false,
            token: None,
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DashboardConfig {
    /// Load configuration layering defaults, the optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            builder = builder.add_source(
                config::File::from(path.to_path_buf()).format(config::FileFormat::Yaml),
            );
        }
        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("build configuration")?;

        let config: Self = settings
            .try_deserialize()
            .context("deserialize configuration")?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        let mut redacted = self.clone();
        if redacted.token.is_some() {
            redacted.token = Some("<redacted>".to_string());
        }
        serde_yaml::to_string(&redacted).context("serialize configuration")
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .with_context(|| format!("invalid base_url: {}", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("base_url must use http or https, got {}", url.scheme());
        }
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be greater than zero");
        }
        if self.connect_timeout_secs == 0 {
            bail!("connect_timeout_secs must be greater than zero");
        }
        if self.log_level.trim().is_empty() {
            bail!("log_level must not be empty");
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }

    /// Configured token, trimmed; blank counts as absent
    pub fn access_token(&self) -> Option<AccessToken> {
        self.token.as_deref().and_then(AccessToken::parse)
    }
}
