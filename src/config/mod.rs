#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const MAX_DELAY_MS: u64 = 10 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin of the web application serving `/appointments/*`.
    pub base_url: String,
    pub request_timeout_seconds: Option<u64>,
    pub flash: FlashConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashConfig {
    pub dismiss_after_ms: u64,
    pub fade_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_seconds: None,
            flash: FlashConfig::default(),
        }
    }
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: 5000,
            fade_ms: 300,
        }
    }
}

impl ClientConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClientError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after expanding `${VAR}` references from the environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;
        let config: Self = toml::from_str(&processed_content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Unknown variables are left as written.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = regex::Regex::new(r"\$\{([^}]+)\}")?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        if let Some(timeout) = self.request_timeout_seconds {
            validate_range("request_timeout_seconds", timeout, 1, 300)?;
        }
        self.flash.validate()
    }
}

impl Validate for FlashConfig {
    fn validate(&self) -> Result<()> {
        validate_range("flash.dismiss_after_ms", self.dismiss_after_ms, 0, MAX_DELAY_MS)?;
        validate_range("flash.fade_ms", self.fade_ms, 0, MAX_DELAY_MS)
    }
}
