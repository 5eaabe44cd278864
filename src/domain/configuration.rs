//! Configuration domain models loaded from `viaja.toml`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViajaConfig {
    /// Generation API configuration.
    #[serde(default)]
    pub generation: GenerationApiConfig,
}

impl ViajaConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.generation.validate()
    }
}

/// Generative-language API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationApiConfig {
    /// API base URL; the model path is appended to it.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier (e.g. `gemini-2.0-flash`).
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds. `None` keeps the HTTP client's default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for GenerationApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: None }
    }
}

impl GenerationApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("model must not be empty"));
        }
        if self.model.contains('/') || self.model.contains(':') {
            return Err(AppError::config_error(format!(
                "model '{}' must be a bare model name without '/' or ':'",
                self.model
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.api_url.cannot_be_a_base() {
            return Err(AppError::config_error(format!(
                "api_url '{}' cannot be used as a base URL",
                self.api_url
            )));
        }
        Ok(())
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> Result<Url, AppError> {
        let mut base = self.api_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(&format!("models/{}:generateContent", self.model))
            .map_err(|e| AppError::config_error(format!("Invalid generation endpoint: {}", e)))
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ViajaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generation.timeout_secs, None);
    }

    #[test]
    fn endpoint_appends_model_path() {
        let config = GenerationApiConfig::default();
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn endpoint_handles_root_and_trailing_slash() {
        let config = GenerationApiConfig {
            api_url: Url::parse("http://127.0.0.1:1234").unwrap(),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "http://127.0.0.1:1234/models/gemini-2.0-flash:generateContent"
        );

        let config = GenerationApiConfig {
            api_url: Url::parse("http://localhost/v1/").unwrap(),
            model: "gemini-pro".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "http://localhost/v1/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn parses_partial_toml() {
        let config: ViajaConfig = toml::from_str(
            r#"
[generation]
model = "gemini-pro"
timeout_secs = 10
"#,
        )
        .unwrap();

        assert_eq!(config.generation.model, "gemini-pro");
        assert_eq!(config.generation.timeout_secs, Some(10));
        assert_eq!(config.generation.api_url, default_api_url());
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<ViajaConfig, _> = toml::from_str("[generation]\nretries = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_zero_timeout_and_bad_model() {
        let config = GenerationApiConfig { timeout_secs: Some(0), ..Default::default() };
        assert!(config.validate().is_err());

        let config = GenerationApiConfig { model: " ".to_string(), ..Default::default() };
        assert!(config.validate().is_err());

        let config = GenerationApiConfig { model: "models/x".to_string(), ..Default::default() };
        assert!(config.validate().is_err());
    }
}
