use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::constants::{counsel, feed};
use crate::error::OracleError;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const CONFIG_PATH_ENV: &str = "TRADE_ORACLE_CONFIG";

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub tick_interval_ms: u64,
    pub window_size: usize,
    /// Fixed RNG seed for a reproducible feed; entropy when absent
    pub seed: Option<u64>,
    /// Starting point of the running volume counter
    pub volume_baseline: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: feed::TICK_INTERVAL.as_millis() as u64,
            window_size: feed::WINDOW_SIZE,
            seed: None,
            volume_baseline: 0,
        }
    }
}

impl SimulationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CounselConfig {
    pub digest_size: usize,
    pub auto_trigger_threshold: usize,
}

impl Default for CounselConfig {
    fn default() -> Self {
        Self {
            digest_size: counsel::DIGEST_SIZE,
            auto_trigger_threshold: counsel::AUTO_TRIGGER_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: "gpt-4o-mini".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub counsel: CounselConfig,
    pub llm: LlmConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load from `$TRADE_ORACLE_CONFIG` (or `config.yaml`), then apply
    /// environment overrides. A missing file means all defaults.
    pub fn load() -> Result<Self, OracleError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::load_from(&path)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, OracleError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, OracleError> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    fn apply_env(&mut self) {
        if self.llm.api_key.is_none() {
            self.llm.api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        if self.llm.base_url.is_none() {
            self.llm.base_url = std::env::var("OPENAI_BASE_URL").ok();
        }
    }

    pub fn validate(&self) -> Result<(), OracleError> {
        if self.simulation.tick_interval_ms == 0 {
            return Err("simulation.tick_interval_ms must be positive".into());
        }
        if self.simulation.window_size == 0 {
            return Err("simulation.window_size must be positive".into());
        }
        if self.counsel.auto_trigger_threshold > self.simulation.window_size {
            return Err(OracleError::Config(format!(
                "counsel.auto_trigger_threshold ({}) exceeds simulation.window_size ({}); automatic analysis could never fire",
                self.counsel.auto_trigger_threshold, self.simulation.window_size
            )));
        }
        if self.counsel.digest_size == 0 {
            return Err("counsel.digest_size must be positive".into());
        }
        if self.llm.model.trim().is_empty() {
            return Err("llm.model must not be empty".into());
        }
        Ok(())
    }
}
