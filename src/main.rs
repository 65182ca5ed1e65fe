// src/main.rs
// =============================================================================
// This is the entry point of getme.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Work out which URLs to search (one argument, or a list on stdin)
// 3. Hand the URLs and keyword to the worker pool
// 4. Exit once every worker has finished printing
//
// Exit codes:
//   0 = run finished (including the usage message and URLs that failed)
//   2 = could not start the run (unreadable stdin, bad flags, ...)
// =============================================================================

mod cli;       // src/cli.rs - command-line parsing and stdin reading
mod config;    // src/config.rs - run-wide settings
mod error;     // src/error.rs - InputError / FetchError
mod fetch;     // src/fetch/ - HTTP retrieval
mod logging;   // src/logging.rs - tracing setup
mod output;    // src/output.rs - text / JSON printing
mod pool;      // src/pool/ - dispatcher and workers
mod snippet;   // src/snippet/ - keyword matching and highlighting

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::{Cli, Invocation};
use error::InputError;
use fetch::HttpFetcher;
use output::Printer;
use pool::Dispatcher;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let (single_url, keyword) = match cli.invocation() {
        Invocation::Single { url, keyword } => (Some(url), keyword),
        Invocation::Stdin { keyword } => (None, keyword),
        Invocation::Usage => {
            println!("{}", cli::USAGE);
            return Ok(0);
        }
    };

    if keyword.is_empty() {
        return Err(InputError::EmptyKeyword.into());
    }

    let config = cli.config()?;
    if cli.no_color || cli.json {
        colored::control::set_override(false);
    }

    // The whole stdin list is read before anything is fetched
    let urls = match single_url {
        Some(url) => vec![url],
        None => cli::read_urls(std::io::stdin().lock())?,
    };

    let fetcher = HttpFetcher::new(config.timeout)?;
    let printer = Printer::stdout(&config);
    let mut dispatcher = Dispatcher::new(config, fetcher, printer);

    debug!(urls = urls.len(), keyword = %keyword, "starting search");
    let summary = dispatcher.run(urls, &keyword).await;
    debug!(
        state = ?dispatcher.state(),
        workers = summary.workers,
        processed = summary.processed,
        failed = summary.failed,
        snippets = summary.snippets,
        "search finished"
    );

    Ok(0)
}
