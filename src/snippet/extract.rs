// src/snippet/extract.rs
// =============================================================================
// Finds every literal keyword occurrence in a document and cuts a context
// window around it.
//
// How it works:
// 1. str::match_indices walks the document left to right and reports each
//    non-overlapping occurrence of the keyword (no regex, no case folding)
// 2. For each occurrence we step back `context_length` characters and
//    forward `context_length` characters, stopping at the document edges
// 3. The window is a borrowed slice of the document; highlighting happens
//    only when the caller asks for a rendered string
//
// Windows are measured in characters, not bytes, so a window edge never
// lands in the middle of a multi-byte UTF-8 sequence.
//
// Rust concepts:
// - Lifetimes: Snippet<'a> borrows from the document, no copying
// - Iterator: extraction is lazy, one snippet per next() call
// =============================================================================

use std::ops::Range;
use std::str::MatchIndices;

use super::Highlight;

// Cuts context windows around keyword matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetExtractor {
    context_length: usize,
}

impl SnippetExtractor {
    pub fn new(context_length: usize) -> Self {
        Self { context_length }
    }

    // Returns a lazy iterator over every match of `keyword` in `document`
    //
    // An empty keyword yields nothing; a keyword that never occurs yields
    // nothing. Neither is an error.
    pub fn extract<'a>(&self, document: &'a str, keyword: &'a str) -> Snippets<'a> {
        Snippets {
            document,
            keyword,
            context_length: self.context_length,
            matches: document.match_indices(keyword),
        }
    }
}

/// One keyword match plus the context around it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet<'a> {
    /// The window text, borrowed from the document
    pub text: &'a str,
    /// Byte span of the window within the document
    pub window: Range<usize>,
    /// Byte span of the match that produced this window
    pub matched: Range<usize>,
    keyword: &'a str,
}

impl Snippet<'_> {
    // The window with every keyword occurrence inside it highlighted
    pub fn render(&self, highlight: &Highlight) -> String {
        highlight.apply(self.text, self.keyword)
    }
}

/// Iterator returned by [`SnippetExtractor::extract`]
pub struct Snippets<'a> {
    document: &'a str,
    keyword: &'a str,
    context_length: usize,
    matches: MatchIndices<'a, &'a str>,
}

impl<'a> Iterator for Snippets<'a> {
    type Item = Snippet<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.keyword.is_empty() {
            return None;
        }

        let (match_start, occurrence) = self.matches.next()?;
        let match_end = match_start + occurrence.len();

        let start = window_start(self.document, match_start, self.context_length);
        let end = window_end(self.document, match_end, self.context_length);

        Some(Snippet {
            text: &self.document[start..end],
            window: start..end,
            matched: match_start..match_end,
            keyword: self.keyword,
        })
    }
}

// Byte index `context_length` characters before `match_start`, or 0
fn window_start(document: &str, match_start: usize, context_length: usize) -> usize {
    if context_length == 0 {
        return match_start;
    }

    document[..match_start]
        .char_indices()
        .rev()
        .nth(context_length - 1)
        .map(|(index, _)| index)
        .unwrap_or(0)
}

// Byte index `context_length` characters after `match_end`, or the end
fn window_end(document: &str, match_end: usize, context_length: usize) -> usize {
    document[match_end..]
        .char_indices()
        .nth(context_length)
        .map(|(index, _)| match_end + index)
        .unwrap_or(document.len())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does Snippet have a lifetime?
//    - `text` is a &str pointing into the fetched document
//    - The lifetime 'a says a Snippet can't outlive that document
//    - The worker prints each snippet and drops it before the document goes
//
// 2. Why char_indices() instead of plain byte arithmetic?
//    - Slicing a &str in the middle of a multi-byte character panics
//    - char_indices() gives us byte offsets that are always on a boundary
//
// 3. Why is the iterator lazy?
//    - Each snippet is printed as soon as it is produced
//    - A page with thousands of matches never builds a big Vec
// -----------------------------------------------------------------------------
