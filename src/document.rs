use log::error;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{CactusError, Result};

/// A template file held in memory as lines, each keeping its terminator.
#[derive(Debug, Clone)]
pub struct TemplateDocument {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl TemplateDocument {
    /// Reads the whole file at `path`.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| {
            error!("Failed to read template file: {:?}", path);
            CactusError::ReadTemplate {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: split_lines(&content),
        })
    }

    /// The same file with different lines.
    pub fn with_lines(&self, lines: Vec<String>) -> Self {
        Self {
            path: self.path.clone(),
            lines,
        }
    }

    /// The name used in diagnostics and diff headers.
    pub fn name(&self) -> String {
        self.path.display().to_string()
    }

    /// The file text, byte for byte what was read.
    pub fn contents(&self) -> String {
        self.lines.concat()
    }

    /// Directory that receives the helper asset for this template.
    pub fn directory(&self) -> PathBuf {
        self.path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    /// Overwrites the file on disk with these lines.
    pub fn write(&self) -> Result<()> {
        fs::write(&self.path, self.contents()).map_err(|source| {
            error!("Failed to write template file: {:?}", self.path);
            CactusError::WriteTemplate {
                path: self.path.clone(),
                source,
            }
        })
    }
}

/// Splits text into lines, keeping `\n` (and any `\r` before it) on each line.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_owned).collect()
}
