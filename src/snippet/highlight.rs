// src/snippet/highlight.rs
// =============================================================================
// Wraps every keyword occurrence in a snippet window with highlight markers.
//
// This is a second, independent scan over the window text: a window can
// contain more occurrences than the one that produced it when matches sit
// close together, and all of them get highlighted.
// =============================================================================

use colored::Colorize;

/// How a keyword occurrence is made to stand out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Highlight {
    /// Red ANSI foreground
    Color,
    /// Plain text markers, for terminals (or tests) without color
    Markers { open: String, close: String },
}

impl Highlight {
    // The fallback used by --no-color
    pub fn brackets() -> Self {
        Highlight::Markers {
            open: "[[".to_string(),
            close: "]]".to_string(),
        }
    }

    fn paint(&self, text: &str) -> String {
        match self {
            Highlight::Color => text.red().to_string(),
            Highlight::Markers { open, close } => format!("{}{}{}", open, text, close),
        }
    }

    // Returns `window` with each literal occurrence of `keyword` painted
    pub fn apply(&self, window: &str, keyword: &str) -> String {
        if keyword.is_empty() {
            return window.to_string();
        }

        let mut out = String::with_capacity(window.len() + keyword.len() * 2);
        let mut last = 0;

        for (index, occurrence) in window.match_indices(keyword) {
            out.push_str(&window[last..index]);
            out.push_str(&self.paint(occurrence));
            last = index + occurrence.len();
        }

        out.push_str(&window[last..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_wrap_every_occurrence() {
        let highlighted = Highlight::brackets().apply("ab ab", "ab");
        assert_eq!(highlighted, "[[ab]] [[ab]]");
    }

    #[test]
    fn test_keyword_is_literal() {
        let highlighted = Highlight::brackets().apply("a.b axb", "a.b");
        assert_eq!(highlighted, "[[a.b]] axb");
    }

    #[test]
    fn test_no_occurrence_leaves_text_alone() {
        assert_eq!(Highlight::brackets().apply("nothing here", "zzz"), "nothing here");
    }

    #[test]
    fn test_color_keeps_keyword_text() {
        colored::control::set_override(true);
        let highlighted = Highlight::Color.apply("say hello", "hello");
        assert!(highlighted.starts_with("say "));
        assert!(highlighted.contains("hello"));
        assert_ne!(highlighted, "say hello");
    }
}
