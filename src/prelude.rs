//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! seqmatch types and traits with a single `use seqmatch::prelude::*;` statement.

pub use crate::engine::SearchEngineBuilder;
pub use crate::options::{GraphFormat, SeqMatchOptions, SeqMatchOptionsBuilder};
pub use crate::output::{OutputFormat, render_reports};
pub use crate::reader::{Source, normalize_bytes, normalize_text, read_source};
pub use crate::*;
