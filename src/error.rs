use std::path::PathBuf;
use thiserror::Error;

use crate::dialect::Dialect;

#[derive(Error, Debug)]
pub enum CactusError {
    #[error("Could not find a line that includes the 'comments_helper.tmpl' template in {0}")]
    MissingInclude(String),

    #[error("Could not deduce whether {0} is a mako or a jinja template")]
    UnrecognizedDialect(String),

    #[error("Could not find the 'extra_head' block in {0}")]
    MissingBlock(String),

    #[error(
        "There are mako and jinja templates in {directory:?} ({template:?} is {dialect}), this would lead to name clashes"
    )]
    MixedDialects {
        directory: PathBuf,
        template: PathBuf,
        dialect: Dialect,
    },

    #[error("Failed to read template {path:?}: {source}")]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write template {path:?}: {source}")]
    WriteTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read helper payload {path:?}: {source}")]
    ReadHelper {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy helper from {from:?} to {to:?}: {source}")]
    CopyHelper {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write patch to {target}: {source}")]
    WriteOutput {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CactusError>;
