use log::{debug, error};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::dialect::{Dialect, CACTUS_HELPER};
use crate::error::{CactusError, Result};

/// Name of the directory holding the helper payloads.
const DATA_DIR: &str = "data";

/// The helper payloads, one per dialect, read from a data directory.
///
/// Payloads are loaded lazily and cached by dialect, so a batch touching many
/// directories reads each payload at most once.
#[derive(Debug)]
pub struct HelperAssets {
    data_dir: PathBuf,
    cache: HashMap<Dialect, String>,
}

impl HelperAssets {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache: HashMap::new(),
        }
    }

    /// Where the payload for `dialect` lives.
    pub fn source_path(&self, dialect: Dialect) -> PathBuf {
        self.data_dir.join(dialect.helper_payload())
    }

    /// Where the helper is deployed inside `directory`.
    pub fn target_path(directory: &Path) -> PathBuf {
        directory.join(CACTUS_HELPER)
    }

    /// Returns the payload for `dialect`, reading it on first use.
    pub fn payload(&mut self, dialect: Dialect) -> Result<&str> {
        if !self.cache.contains_key(&dialect) {
            let path = self.source_path(dialect);
            debug!("Loading {} helper payload from {:?}", dialect, path);
            let content = fs::read_to_string(&path).map_err(|source| {
                error!("Failed to read helper payload: {:?}", path);
                CactusError::ReadHelper { path, source }
            })?;
            self.cache.insert(dialect, content);
        }
        Ok(self.cache[&dialect].as_str())
    }

    /// Copies the payload for `dialect` into `directory`, replacing any
    /// existing helper there.
    pub fn deploy(&self, dialect: Dialect, directory: &Path) -> Result<PathBuf> {
        let from = self.source_path(dialect);
        let to = Self::target_path(directory);
        fs::copy(&from, &to).map_err(|source| {
            error!("Failed to copy file from {:?} to {:?}", from, to);
            CactusError::CopyHelper {
                from: from.clone(),
                to: to.clone(),
                source,
            }
        })?;
        Ok(to)
    }

    /// Number of payloads currently cached.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

/// The data directory shipped next to the executable, or the crate's own
/// `data/` when running from a source checkout.
pub fn default_data_dir() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DATA_DIR)));
    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => Path::new(env!("CARGO_MANIFEST_DIR")).join(DATA_DIR),
    }
}
