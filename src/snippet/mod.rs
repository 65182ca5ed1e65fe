// src/snippet/mod.rs
// =============================================================================
// This module turns a fetched document into keyword-context snippets.
//
// Submodules:
// - extract: locates matches and computes the context window around each
// - highlight: wraps keyword occurrences inside a window with markers
// =============================================================================

mod extract;
mod highlight;

pub use extract::{Snippet, SnippetExtractor};
pub use highlight::Highlight;
