//! Rewrites the templates of a Nikola theme so they render
//! [Cactus Comments](https://cactus.chat/).
//!
//! Each template's `comments_helper.tmpl` include is switched to
//! `comments_helper_cactus.tmpl` and a `comment_extra_head()` call is added
//! at the end of its `extra_head` block. Every directory that held a
//! rewritten template then gets the helper for its template language.

pub mod assets;
pub mod batch;
pub mod config;
pub mod dialect;
pub mod document;
pub mod error;
pub mod locator;
pub mod output;
pub mod transform;

pub use assets::HelperAssets;
pub use batch::{Cactusifier, DirectoryRequirements};
pub use dialect::Dialect;
pub use error::CactusError;
pub use locator::{locate, Anchors};
pub use output::{DiffSink, InPlaceSink, OutputTarget, PatchSink};
pub use transform::{cactusify, synthesize};
