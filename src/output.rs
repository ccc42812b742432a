use log::{error, info};
use similar::TextDiff;
use std::{
    fmt, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::assets::HelperAssets;
use crate::dialect::Dialect;
use crate::document::TemplateDocument;
use crate::error::{CactusError, Result};

/// Context lines around each change, as `diff -u` does by default.
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Where a batch puts its results.
///
/// The orchestrator does not know whether it is rewriting files or
/// collecting a patch; it hands every result to the sink.
pub trait PatchSink {
    /// Receives a template and its rewritten counterpart.
    fn template(
        &mut self,
        original: &TemplateDocument,
        modified: &TemplateDocument,
    ) -> Result<()>;

    /// Receives a directory that needs the helper for `dialect`.
    fn helper(
        &mut self,
        assets: &mut HelperAssets,
        dialect: Dialect,
        directory: &Path,
    ) -> Result<()>;
}

/// Rewrites templates on disk and copies helper files next to them.
#[derive(Debug, Default)]
pub struct InPlaceSink;

impl PatchSink for InPlaceSink {
    fn template(
        &mut self,
        _original: &TemplateDocument,
        modified: &TemplateDocument,
    ) -> Result<()> {
        modified.write()?;
        info!("Rewrote {:?}", modified.path);
        Ok(())
    }

    fn helper(
        &mut self,
        assets: &mut HelperAssets,
        dialect: Dialect,
        directory: &Path,
    ) -> Result<()> {
        let target = assets.deploy(dialect, directory)?;
        info!("Deployed {} helper to {:?}", dialect, target);
        Ok(())
    }
}

/// Collects a unified diff and leaves the filesystem alone.
#[derive(Debug)]
pub struct DiffSink {
    patch: String,
    context_lines: usize,
}

impl DiffSink {
    pub fn new(context_lines: usize) -> Self {
        Self {
            patch: String::new(),
            context_lines,
        }
    }

    pub fn patch(&self) -> &str {
        &self.patch
    }

    pub fn into_patch(self) -> String {
        self.patch
    }

    /// Writes the collected patch to `target` in one go.
    pub fn write_to(&self, target: &OutputTarget) -> Result<()> {
        let written = match target {
            OutputTarget::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(self.patch.as_bytes())
                    .and_then(|()| stdout.flush())
            }
            OutputTarget::File(path) => fs::write(path, &self.patch),
        };
        written.map_err(|source| {
            error!("Failed to write patch to {}", target);
            CactusError::WriteOutput {
                target: target.to_string(),
                source,
            }
        })
    }

    fn push_diff(&mut self, old: &str, new: &str, old_label: &str, new_label: &str) {
        self.patch
            .push_str(&unified_diff(old, new, old_label, new_label, self.context_lines));
    }
}

impl Default for DiffSink {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_LINES)
    }
}

impl PatchSink for DiffSink {
    fn template(
        &mut self,
        original: &TemplateDocument,
        modified: &TemplateDocument,
    ) -> Result<()> {
        let label = original.name();
        self.push_diff(&original.contents(), &modified.contents(), &label, &label);
        info!("Rewrote {:?} (diff only)", original.path);
        Ok(())
    }

    fn helper(
        &mut self,
        assets: &mut HelperAssets,
        dialect: Dialect,
        directory: &Path,
    ) -> Result<()> {
        let label = HelperAssets::target_path(directory).display().to_string();
        let payload = assets.payload(dialect)?.to_string();
        self.push_diff("", &payload, "", &label);
        Ok(())
    }
}

/// Renders a unified diff between two texts, or nothing if they are equal.
pub fn unified_diff(
    old: &str,
    new: &str,
    old_label: &str,
    new_label: &str,
    context_lines: usize,
) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut unified = diff.unified_diff();
    unified
        .context_radius(context_lines)
        .header(old_label, new_label);
    unified.to_string()
}

/// Destination of the patch in diff mode. `-` means standard output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn parse(value: &str) -> Self {
        if value == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}
