use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::output::DEFAULT_CONTEXT_LINES;

#[derive(Debug, Deserialize)]
pub struct CactusConfig {
    /// Directory holding the `comments_helper_cactus_*.tmpl` payloads.
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
}

fn default_context_lines() -> usize {
    DEFAULT_CONTEXT_LINES
}

impl Default for CactusConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            context_lines: default_context_lines(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CactusConfig {
    /// Loads a YAML config. A relative `data_dir` is taken relative to the
    /// config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: CactusConfig = serde_yaml::from_str(&content)?;
        if let Some(data_dir) = config.data_dir.take() {
            let base = path.parent().unwrap_or(Path::new("."));
            config.data_dir = Some(base.join(data_dir));
        }
        Ok(config)
    }
}
