//! Runtime configuration.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Application configuration, built from defaults overridden by
/// `TODO_API_*` environment variables (e.g. `TODO_API_SERVER_PORT=8080`).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .add_source(
                Environment::with_prefix("TODO_API")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment_overrides() {
        let config = AppConfig::new().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server_address(), "0.0.0.0:3000");
    }
}
