// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There are two ways to call getme:
//   getme <url> <keyword>           search a single page
//   echo <urls> | getme <keyword>   search every URL read from stdin
//
// Any other number of positional arguments prints a short usage message
// and exits successfully without fetching anything. That's why the
// positionals are collected into a Vec and interpreted by hand instead of
// being declared as two separate clap arguments.
//
// Rust concepts:
// - Derive macros: clap generates the parser from the struct definition
// - Enums: Invocation says which of the two modes we're in
// - Generics: read_urls works with any BufRead, so tests can pass a &[u8]
// =============================================================================

use std::io::BufRead;
use std::time::Duration;

use clap::Parser;

use crate::config::{Config, OutputFormat, DEFAULT_CONTEXT_LENGTH, DEFAULT_WORKER_COUNT};
use crate::error::InputError;
use crate::snippet::Highlight;

pub const USAGE: &str = "Usage: getme <url> <keyword>\nOr: echo <urls> | getme <keyword>";

#[derive(Parser, Debug)]
#[command(
    name = "getme",
    version,
    about = "Fetch web pages and print every keyword match with its surrounding context",
    long_about = "getme downloads one or more pages, searches them for a literal keyword and \
                  prints each match with the text around it, the keyword highlighted. \
                  Pass a URL and a keyword, or pass only a keyword and pipe URLs on stdin."
)]
pub struct Cli {
    /// `<url> <keyword>`, or just `<keyword>` with URLs on standard input
    ///
    /// Flags go before these. Once the first positional is seen, everything
    /// after it is taken literally, so `getme <url> -v` searches for "-v".
    /// Use `getme -- -v` to search stdin URLs for a keyword that looks like
    /// one of our own flags.
    #[arg(value_name = "ARGS", allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<String>,

    /// Characters of context shown on each side of a match
    #[arg(long, env = "GETME_CONTEXT", default_value_t = DEFAULT_CONTEXT_LENGTH)]
    pub context: usize,

    /// Number of pages fetched concurrently
    #[arg(long, env = "GETME_WORKERS", default_value_t = DEFAULT_WORKER_COUNT)]
    pub workers: usize,

    /// Give up on a request after this many seconds (no limit by default)
    #[arg(long, env = "GETME_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print newline-delimited JSON instead of colored text
    #[arg(long)]
    pub json: bool,

    /// Disable ANSI colors; keywords are wrapped in [[ ]] instead
    #[arg(long)]
    pub no_color: bool,

    /// Include the failing URL on every error line
    #[arg(long)]
    pub tag_errors: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// What the positional arguments ask us to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `getme <url> <keyword>`
    Single { url: String, keyword: String },
    /// `getme <keyword>`, URLs come from stdin
    Stdin { keyword: String },
    /// Wrong number of arguments
    Usage,
}

impl Cli {
    pub fn invocation(&self) -> Invocation {
        match self.args.as_slice() {
            [url, keyword] => Invocation::Single {
                url: url.clone(),
                keyword: keyword.clone(),
            },
            [keyword] => Invocation::Stdin {
                keyword: keyword.clone(),
            },
            _ => Invocation::Usage,
        }
    }

    pub fn config(&self) -> Result<Config, InputError> {
        Config {
            context_length: self.context,
            worker_count: self.workers,
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            highlight: if self.no_color {
                Highlight::brackets()
            } else {
                Highlight::Color
            },
            tag_errors: self.tag_errors,
            timeout: self.timeout.map(Duration::from_secs),
        }
        .validate()
    }
}

// Reads one URL per line until end of input
//
// Lines are trimmed and blank lines skipped. Bytes that aren't valid UTF-8
// are replaced rather than rejected; the transport decides whether such a
// URL is usable. An I/O error aborts the whole list, so we never start
// fetching from a half-read input.
pub fn read_urls<R: BufRead>(mut reader: R) -> Result<Vec<String>, InputError> {
    let mut urls = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        let text = String::from_utf8_lossy(&line);
        let url = text.trim();
        if !url.is_empty() {
            urls.push(url.to_string());
        }
    }

    Ok(urls)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is `match self.args.as_slice()`?
//    - Slice patterns let us match on the length and contents at once
//    - [url, keyword] only matches a slice with exactly two elements
//    - `_` catches everything else (zero, three, four... arguments)
//
// 2. Why `env = "GETME_WORKERS"`?
//    - clap will read the value from that environment variable when the
//      flag isn't given on the command line
//
// 3. What does the `?` after read_until do?
//    - read_until returns io::Result<usize> (0 means end of input)
//    - `?` converts io::Error into InputError::ReadStdin via #[from]
//
// 4. What is allow_hyphen_values?
//    - Normally clap treats anything starting with '-' as a flag
//    - With it, a keyword like "-->" or "-1" is kept as a plain value
// -----------------------------------------------------------------------------
