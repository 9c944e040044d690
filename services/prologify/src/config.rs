use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub connectives: ConnectivesConfig,
    #[serde(default)]
    pub inverse: InverseConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Symbols used by the rule miner for logical connectives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectivesConfig {
    #[serde(default = "default_implication")]
    pub implication: String,
    #[serde(default = "default_conjunction")]
    pub conjunction: String,
    #[serde(default = "default_disjunction")]
    pub disjunction: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InverseConfig {
    #[serde(default = "default_marker")]
    pub marker: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_false")]
    pub strip_types: bool,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config from {:?}", path.as_ref()))?;
        let config: Config = toml::from_str(&content)
            .context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty symbols; an empty pattern matches between every character
    pub fn validate(&self) -> Result<()> {
        let symbols = [
            ("connectives.implication", &self.connectives.implication),
            ("connectives.conjunction", &self.connectives.conjunction),
            ("connectives.disjunction", &self.connectives.disjunction),
            ("inverse.marker", &self.inverse.marker),
        ];
        for (name, symbol) in symbols {
            if symbol.is_empty() {
                anyhow::bail!("Config value {} must not be empty", name);
            }
        }
        Ok(())
    }

    /// Load from `path` when given, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

impl Default for ConnectivesConfig {
    fn default() -> Self {
        Self {
            implication: default_implication(),
            conjunction: default_conjunction(),
            disjunction: default_disjunction(),
        }
    }
}

impl Default for InverseConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            strip_types: default_false(),
        }
    }
}

fn default_implication() -> String {
    "<-".to_string()
}

fn default_conjunction() -> String {
    "∧".to_string()
}

fn default_disjunction() -> String {
    "∨".to_string()
}

fn default_marker() -> String {
    "INV".to_string()
}

fn default_suffix() -> String {
    "ori.txt".to_string()
}

fn default_false() -> bool {
    false
}
