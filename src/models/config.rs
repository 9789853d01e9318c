//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared by the gateway and the console binary.
pub struct ServerConfig {
    /// Base URL of the REST backend, without a trailing slash.
    pub api_base_url: String,
    /// Request timeout applied to every backend call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Optional bearer token attached to every request.
    #[serde(default)]
    pub auth_token: Option<String>,
}

#[cfg(feature = "http")]
impl ServerConfig {
    /// Loads configuration from an optional YAML file plus `ASSETDESK_*`
    /// environment overrides.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("ASSETDESK"))
            .build()?
            .try_deserialize()
    }
}
