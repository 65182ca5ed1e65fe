// src/error.rs
// =============================================================================
// Error types for getme.
//
// There are two families of errors:
// - InputError: something is wrong with how we were invoked. These stop the
//   program before any URL is fetched.
// - FetchError: one URL could not be retrieved. These never stop the run;
//   the worker prints them and moves on to the next URL.
//
// Rust concepts:
// - thiserror: derive std::error::Error and Display from attributes
// - #[source]: keeps the underlying error available for error chains
// =============================================================================

use thiserror::Error;

// Errors that abort the whole run
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading the URL list from standard input failed
    #[error("error reading input: {0}")]
    ReadStdin(#[from] std::io::Error),

    /// An empty keyword would match between every pair of characters
    #[error("keyword must not be empty")]
    EmptyKeyword,

    /// The pool needs at least one worker to ever drain the queue
    #[error("worker count must be at least 1 (got {0})")]
    InvalidWorkerCount(usize),
}

// Errors for a single URL
//
// Each variant maps to one way a fetch can go wrong. The Display text is
// what ends up on the `Error:` line, so keep it short and human-readable.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL could not be parsed at all
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// DNS, TCP, TLS or timeout failure before we got a status line
    #[error("error fetching URL: {0}")]
    Transport(#[source] reqwest::Error),

    /// Anything other than 200 OK, after redirects were followed
    #[error("non-OK HTTP status: {0}")]
    Status(reqwest::StatusCode),

    /// The status was fine but the body could not be read completely
    #[error("error reading response body: {0}")]
    Body(#[source] reqwest::Error),
}
