use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use common::config::Validate;
use common::contact::is_valid_email;

pub const DEFAULT_CONFIG_FILE: &str = "portfolio_server_config.yaml";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_address: String,
    /// Inbox that receives every contact form notification.
    pub owner_email: String,
    pub owner_name: String,
    pub notification_sender: String,
    pub confirmation_sender: String,
    pub email_api_url: String,
    pub api_key_env_var: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0:5000".to_string(),
            owner_email: "owner@example.com".to_string(),
            owner_name: "Portfolio Owner".to_string(),
            notification_sender: "Portfolio Contact <onboarding@resend.dev>".to_string(),
            confirmation_sender: "Portfolio Owner <onboarding@resend.dev>".to_string(),
            email_api_url: "https://api.resend.com/emails".to_string(),
            api_key_env_var: "RESEND_API_KEY".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.listen_address
            .parse()
            .map_err(|e| format!("Invalid listen address '{}': {}", self.listen_address, e))
    }

    /// Reads the provider API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String, String> {
        match std::env::var(&self.api_key_env_var) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            Ok(_) => Err(format!("Environment variable {} is empty", self.api_key_env_var)),
            Err(_) => Err(format!("Environment variable {} is not set", self.api_key_env_var)),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.socket_addr()?;
        if !is_valid_email(&self.owner_email) {
            return Err(format!("Owner email '{}' is not a valid address", self.owner_email));
        }
        if self.owner_name.trim().is_empty() {
            return Err("Owner name must not be empty".to_string());
        }
        if self.notification_sender.trim().is_empty() || self.confirmation_sender.trim().is_empty() {
            return Err("Sender identities must not be empty".to_string());
        }
        if !self.email_api_url.starts_with("http://") && !self.email_api_url.starts_with("https://") {
            return Err(format!("Email API URL '{}' must be http(s)", self.email_api_url));
        }
        if self.api_key_env_var.trim().is_empty() {
            return Err("API key variable name must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigManager, InMemoryContentProvider, YamlConfigSerializer};

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.socket_addr().unwrap().port(), 5000);
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let provider = InMemoryContentProvider::with_content(
            "listen_address: 127.0.0.1:8080\nowner_email: me@portfolio.dev\n",
        );
        let manager: ConfigManager<_, ServerConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        let config = manager.get_config().unwrap();
        assert_eq!(config.listen_address, "127.0.0.1:8080");
        assert_eq!(config.owner_email, "me@portfolio.dev");
        assert_eq!(config.api_key_env_var, "RESEND_API_KEY");
    }

    #[test]
    fn test_invalid_owner_email_is_rejected() {
        let provider = InMemoryContentProvider::with_content("owner_email: nobody\n");
        let manager: ConfigManager<_, ServerConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        let err = manager.get_config().unwrap_err();
        assert!(err.contains("Owner email"));
    }

    #[test]
    fn test_bad_listen_address_is_rejected() {
        let config = ServerConfig {
            listen_address: "localhost".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("Invalid listen address"));
    }

    #[test]
    fn test_missing_api_key_is_reported() {
        let config = ServerConfig {
            api_key_env_var: "PORTFOLIO_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.api_key().unwrap_err().contains("is not set"));
    }
}
