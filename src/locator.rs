use log::debug;

use crate::dialect::{Dialect, COMMENTS_HELPER, EXTRA_HEAD_BLOCK};
use crate::error::{CactusError, Result};

/// Zero-based line indices the edit is anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchors {
    /// The line importing `comments_helper.tmpl`.
    pub include: usize,
    /// The line closing the `extra_head` block.
    pub block_end: usize,
}

/// Finds the comments include, the dialect it is written in and the end of
/// the `extra_head` block that follows it.
///
/// `name` only appears in error messages.
pub fn locate(lines: &[String], name: &str) -> Result<(Dialect, Anchors)> {
    let include = lines
        .iter()
        .position(|line| line.contains(COMMENTS_HELPER))
        .ok_or_else(|| CactusError::MissingInclude(name.to_string()))?;

    let dialect = Dialect::from_include_line(&lines[include])
        .ok_or_else(|| CactusError::UnrecognizedDialect(name.to_string()))?;

    let block_start = include
        + lines[include..]
            .iter()
            .position(|line| {
                line.trim_start().starts_with(dialect.block_open())
                    && line.contains(EXTRA_HEAD_BLOCK)
            })
            .ok_or_else(|| CactusError::MissingBlock(name.to_string()))?;

    let block_end = block_start
        + lines[block_start..]
            .iter()
            .position(|line| line.trim() == dialect.block_close())
            .ok_or_else(|| CactusError::MissingBlock(name.to_string()))?;

    debug!(
        "{}: {} template, include at line {}, extra_head closes at line {}",
        name,
        dialect,
        include + 1,
        block_end + 1
    );

    Ok((dialect, Anchors { include, block_end }))
}
