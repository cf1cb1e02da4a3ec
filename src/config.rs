use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub system_config: SystemConfig,
    pub translator_config: TranslatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_endpoint() -> String {
    "https://translation.googleapis.com/language/translate/v2".to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        let mut config: Config = if path_lower.ends_with(".json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        // Env override so the credential never has to live on disk
        if let Ok(key) = std::env::var("GOOGLE_TRANSLATE_API_KEY") {
            config.translator_config.api_key = key;
        }

        Ok(config)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 12480,
            static_dir: default_static_dir(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_yaml_config() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "system_config:\n  host: 127.0.0.1\n  port: 9000\ntranslator_config:\n  api_key: test-key\n"
        )
        .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.system_config.host, "127.0.0.1");
        assert_eq!(config.system_config.port, 9000);
        assert_eq!(config.system_config.static_dir, "static");
        assert_eq!(
            config.translator_config.endpoint,
            "https://translation.googleapis.com/language/translate/v2"
        );
    }

    #[test]
    fn loads_json_config() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"system_config": {{"host": "0.0.0.0", "port": 8080}}, "translator_config": {{"endpoint": "http://localhost:5000/translate"}}}}"#
        )
        .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.system_config.port, 8080);
        assert_eq!(
            config.translator_config.endpoint,
            "http://localhost:5000/translate"
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::load("does-not-exist.yaml").is_err());
    }
}
