use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub translator_config: TranslatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory the upload page is served from.
    #[serde(default = "default_web_dir")]
    pub web_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Document-translate operation URL of the hosted service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_web_dir() -> String {
    "web".to_string()
}

fn default_endpoint() -> String {
    "https://api.cognitive.microsofttranslator.com/translator/document:translate".to_string()
}

impl Config {
    /// Load from a YAML or JSON file, picked by extension.
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            web_dir: default_web_dir(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config: Config = serde_yaml::from_str("system_config:\n  port: 9000\n").unwrap();
        assert_eq!(config.system_config.port, 9000);
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert!(config.translator_config.endpoint.contains("document:translate"));
    }

    #[test]
    fn empty_config_is_runnable() {
        let config = Config::default();
        assert_eq!(config.system_config.web_dir, "web");
    }
}
