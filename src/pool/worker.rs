// src/pool/worker.rs
// =============================================================================
// A single worker in the pool.
//
// Loop:
// 1. Take the next URL from the shared queue (waits if the queue is empty)
// 2. Fetch it
// 3. On failure print `Error: ...` and go back to 1
// 4. On success print the `[URL]` header, then every snippet as soon as
//    the extractor produces it
//
// The loop ends only when the dispatcher has closed the queue and every
// URL in it has been taken. A failed URL never stops a worker.
// =============================================================================

use std::io;
use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

use crate::fetch::Fetcher;
use crate::output::Printer;
use crate::snippet::SnippetExtractor;

// The receiving half of the work queue, shared by every worker
//
// tokio's mpsc has a single receiver, so workers take turns holding it.
// Whoever holds the lock waits for the next URL; the others wait for the
// lock. Once the sender is dropped and the buffer is empty, recv() returns
// None for each worker in turn.
pub type SharedQueue = Arc<Mutex<mpsc::Receiver<String>>>;

/// Counters one worker returns when it exits
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkerStats {
    /// URLs claimed from the queue
    pub processed: usize,
    /// URLs whose fetch failed
    pub failed: usize,
    /// Snippets printed
    pub snippets: usize,
}

pub struct Worker<F> {
    id: usize,
    fetcher: Arc<F>,
    extractor: SnippetExtractor,
    keyword: Arc<str>,
    printer: Printer,
}

impl<F: Fetcher> Worker<F> {
    pub fn new(
        id: usize,
        fetcher: Arc<F>,
        extractor: SnippetExtractor,
        keyword: Arc<str>,
        printer: Printer,
    ) -> Self {
        Self {
            id,
            fetcher,
            extractor,
            keyword,
            printer,
        }
    }

    pub async fn run(self, queue: SharedQueue) -> WorkerStats {
        debug!(worker = self.id, "worker started");

        let mut stats = WorkerStats::default();
        while let Some(url) = next_url(&queue).await {
            self.process(&url, &mut stats).await;
        }

        debug!(
            worker = self.id,
            processed = stats.processed,
            failed = stats.failed,
            "worker exiting, queue drained"
        );
        stats
    }

    async fn process(&self, url: &str, stats: &mut WorkerStats) {
        stats.processed += 1;

        let document = match self.fetcher.fetch(url).await {
            Ok(document) => document,
            Err(err) => {
                stats.failed += 1;
                debug!(worker = self.id, url, error = %err, "fetch failed");
                report(self.printer.error(url, &err));
                return;
            }
        };

        debug!(worker = self.id, url, bytes = document.len(), "fetched document");
        report(self.printer.document(url));

        for snippet in self.extractor.extract(&document, &self.keyword) {
            stats.snippets += 1;
            report(self.printer.snippet(url, &snippet));
        }
    }
}

async fn next_url(queue: &SharedQueue) -> Option<String> {
    queue.lock().await.recv().await
}

// Output is best effort: a closed stdout shouldn't kill the worker
fn report(result: io::Result<()>) {
    if let Err(err) = result {
        warn!(error = %err, "failed to write output");
    }
}
