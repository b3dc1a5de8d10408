use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::snake::SnakeSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "portfolio_client_config.yaml";

/// Resolves `file_name` next to the executable, falling back to the working directory.
pub fn beside_executable(file_name: &str) -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name);
    }
    PathBuf::from(file_name)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(|| beside_executable(CONFIG_FILE_NAME)))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ClientConfig {
    pub relay_url: String,
    pub show_boot: bool,
    pub roles: Vec<String>,
    pub snake: SnakeSettings,
    pub prefs_file: String,
    pub log_file: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_url: "http://127.0.0.1:5000/send-contact-email".to_string(),
            show_boot: true,
            roles: [
                "Full-Stack Developer",
                "React Specialist",
                "UI/UX Enthusiast",
                "Problem Solver",
                "Code Craftsman",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            snake: SnakeSettings::default(),
            prefs_file: "portfolio_client_prefs.yaml".to_string(),
            log_file: "portfolio_client.log".to_string(),
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.relay_url.starts_with("http://") && !self.relay_url.starts_with("https://") {
            return Err(format!("Relay URL '{}' must be http(s)", self.relay_url));
        }
        if self.roles.is_empty() {
            return Err("At least one role is required".to_string());
        }
        if self.roles.iter().any(|role| role.trim().is_empty()) {
            return Err("Roles must not be blank".to_string());
        }
        if self.prefs_file.trim().is_empty() {
            return Err("Preferences file must not be empty".to_string());
        }
        self.snake.validate()
    }
}
