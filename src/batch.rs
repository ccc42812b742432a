use log::info;
use std::path::{Path, PathBuf};

use crate::assets::HelperAssets;
use crate::dialect::Dialect;
use crate::document::TemplateDocument;
use crate::error::{CactusError, Result};
use crate::output::PatchSink;
use crate::transform::cactusify;

/// The dialect each template directory needs a helper for, in the order the
/// directories were first seen.
#[derive(Debug, Default)]
pub struct DirectoryRequirements {
    entries: Vec<(PathBuf, Dialect)>,
}

impl DirectoryRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `template` in `directory` is a `dialect` template. A
    /// directory can only ever need one dialect.
    pub fn record(&mut self, directory: &Path, template: &Path, dialect: Dialect) -> Result<()> {
        match self.get(directory) {
            Some(existing) if existing != dialect => Err(CactusError::MixedDialects {
                directory: directory.to_path_buf(),
                template: template.to_path_buf(),
                dialect,
            }),
            Some(_) => Ok(()),
            None => {
                self.entries.push((directory.to_path_buf(), dialect));
                Ok(())
            }
        }
    }

    pub fn get(&self, directory: &Path) -> Option<Dialect> {
        self.entries
            .iter()
            .find(|(dir, _)| dir == directory)
            .map(|(_, dialect)| *dialect)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, Dialect)> {
        self.entries
            .iter()
            .map(|(dir, dialect)| (dir.as_path(), *dialect))
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Runs the rewrite over a list of templates.
pub struct Cactusifier {
    assets: HelperAssets,
}

impl Cactusifier {
    pub fn new(assets: HelperAssets) -> Self {
        Self { assets }
    }

    pub fn assets(&self) -> &HelperAssets {
        &self.assets
    }

    /// Rewrites every template in order, then hands each directory that
    /// needs a helper to the sink.
    ///
    /// The first failure stops the batch. Templates already handed to the
    /// sink stay handed; no helper is deployed unless every template
    /// succeeded.
    pub fn run<P, S>(&mut self, templates: &[P], sink: &mut S) -> Result<DirectoryRequirements>
    where
        P: AsRef<Path>,
        S: PatchSink + ?Sized,
    {
        let mut requirements = DirectoryRequirements::new();

        for template in templates {
            let document = TemplateDocument::read(template.as_ref())?;
            let name = document.name();
            let (dialect, modified) = cactusify(&document.lines, &name)?;

            let rewritten = document.with_lines(modified);

            sink.template(&document, &rewritten)?;
            requirements.record(&document.directory(), &document.path, dialect)?;
        }

        for (directory, dialect) in requirements.iter() {
            sink.helper(&mut self.assets, dialect, directory)?;
        }

        info!(
            "Rewrote {} template(s), {} helper(s) needed",
            templates.len(),
            requirements.len()
        );
        Ok(requirements)
    }
}
