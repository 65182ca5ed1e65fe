// src/output.rs
// =============================================================================
// Writes results to standard output.
//
// Every worker holds a clone of the same Printer. Each call formats one
// complete block first and then writes it under a short lock, so a block
// is never torn apart by another worker. Blocks from different URLs still
// interleave in whatever order the workers finish.
//
// Two formats:
// - Text: cyan `[URL]` header, magenta `Snippet:` label, red keyword.
//   The header and every snippet end with a blank line, so consecutive
//   URLs stay visually separated.
// - Json: one tagged object per line, easy to pipe into jq
// =============================================================================

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use colored::Colorize;
use serde::Serialize;

use crate::config::{Config, OutputFormat};
use crate::error::FetchError;
use crate::snippet::{Highlight, Snippet};

// One line of --json output
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Document {
        url: &'a str,
    },
    Snippet {
        url: &'a str,
        match_start: usize,
        match_end: usize,
        text: &'a str,
    },
    Error {
        url: &'a str,
        message: String,
    },
}

#[derive(Clone)]
pub struct Printer {
    format: OutputFormat,
    highlight: Highlight,
    tag_errors: bool,
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Printer {
    pub fn new<W: Write + Send + 'static>(config: &Config, sink: W) -> Self {
        Self {
            format: config.format,
            highlight: config.highlight.clone(),
            tag_errors: config.tag_errors,
            sink: Arc::new(Mutex::new(Box::new(sink))),
        }
    }

    pub fn stdout(config: &Config) -> Self {
        Self::new(config, io::stdout())
    }

    // Announces a successfully fetched URL
    pub fn document(&self, url: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                let header = format!("[URL] {}", url);
                self.write_block(&format!("{}\n\n", header.as_str().cyan()))
            }
            OutputFormat::Json => self.write_event(&Event::Document { url }),
        }
    }

    pub fn snippet(&self, url: &str, snippet: &Snippet<'_>) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                let rendered = snippet.render(&self.highlight);
                self.write_block(&format!("{}\n{}\n\n", "Snippet:".magenta(), rendered))
            }
            OutputFormat::Json => self.write_event(&Event::Snippet {
                url,
                match_start: snippet.matched.start,
                match_end: snippet.matched.end,
                text: snippet.text,
            }),
        }
    }

    pub fn error(&self, url: &str, error: &FetchError) -> io::Result<()> {
        match self.format {
            OutputFormat::Text if self.tag_errors => {
                self.write_block(&format!("Error: [{}] {}\n", url, error))
            }
            OutputFormat::Text => self.write_block(&format!("Error: {}\n", error)),
            OutputFormat::Json => self.write_event(&Event::Error {
                url,
                message: error.to_string(),
            }),
        }
    }

    fn write_event(&self, event: &Event<'_>) -> io::Result<()> {
        let mut line = serde_json::to_string(event)?;
        line.push('\n');
        self.write_block(&line)
    }

    fn write_block(&self, block: &str) -> io::Result<()> {
        // A panic elsewhere while holding the lock doesn't corrupt a byte sink
        let mut sink = self
            .sink
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        sink.write_all(block.as_bytes())?;
        sink.flush()
    }
}

// In-memory sink shared between a Printer and the test that inspects it
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

#[cfg(test)]
impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[cfg(test)]
impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
