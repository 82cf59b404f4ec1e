//! Server configuration loaded from environment variables.

use tm_core::errors::ConfigurationError;
use tm_core::services::auth::ClientCredentials;
use tm_core::services::keystore::KeyStoreConfig;

/// HTTP listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Reads `SERVER_HOST` / `SERVER_PORT`, defaulting to `127.0.0.1:8080`.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|e| ConfigurationError::InvalidSetting {
                name: "SERVER_PORT".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { host, port })
    }

    /// Address string suitable for `HttpServer::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Complete process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub keystore: KeyStoreConfig,
    pub client: ClientCredentials,
}

impl Config {
    /// Loads the full configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            keystore: KeyStoreConfig::from_env()?,
            client: ClientCredentials::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address_joins_host_and_port() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9090,
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9090");
    }
}
