// src/pool/dispatcher.rs
// =============================================================================
// Runs the worker pool for one search.
//
// How it works:
// 1. Create a bounded queue whose capacity equals the worker count
// 2. Spawn exactly `worker_count` workers on the tokio runtime
// 3. Push every URL in input order (send() waits while the queue is full)
// 4. Drop the sender, which closes the queue
// 5. Wait for every worker to finish the remaining URLs and exit
//
// run() only returns after step 5, so by then all output has been written.
//
// Pool states:
//   Created -> Running -> Draining -> Done
// =============================================================================

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

use super::worker::{Worker, WorkerStats};
use crate::config::Config;
use crate::fetch::Fetcher;
use crate::output::Printer;
use crate::snippet::SnippetExtractor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolState {
    /// Nothing spawned yet
    Created,
    /// Workers are up and the queue is open
    Running,
    /// Queue closed, workers finishing what's left
    Draining,
    /// Every worker has exited
    Done,
}

/// Totals across all workers for one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub workers: usize,
    pub processed: usize,
    pub failed: usize,
    pub snippets: usize,
}

impl RunSummary {
    fn add(&mut self, stats: WorkerStats) {
        self.workers += 1;
        self.processed += stats.processed;
        self.failed += stats.failed;
        self.snippets += stats.snippets;
    }
}

pub struct Dispatcher<F> {
    config: Config,
    fetcher: Arc<F>,
    printer: Printer,
    state: PoolState,
}

impl<F: Fetcher + 'static> Dispatcher<F> {
    pub fn new(config: Config, fetcher: F, printer: Printer) -> Self {
        Self {
            config,
            fetcher: Arc::new(fetcher),
            printer,
            state: PoolState::Created,
        }
    }

    pub fn state(&self) -> PoolState {
        self.state
    }

    // Searches every URL for `keyword` and waits until all workers are done
    pub async fn run(&mut self, urls: Vec<String>, keyword: &str) -> RunSummary {
        let worker_count = self.config.worker_count;
        let keyword: Arc<str> = Arc::from(keyword);
        let extractor = SnippetExtractor::new(self.config.context_length);

        let (sender, receiver) = mpsc::channel::<String>(worker_count);
        let queue = Arc::new(Mutex::new(receiver));

        let handles: Vec<_> = (0..worker_count)
            .map(|id| {
                let worker = Worker::new(
                    id,
                    self.fetcher.clone(),
                    extractor,
                    keyword.clone(),
                    self.printer.clone(),
                );
                tokio::spawn(worker.run(queue.clone()))
            })
            .collect();
        self.transition(PoolState::Running);

        for url in urls {
            // Only fails if every worker is gone, which means they panicked
            if sender.send(url).await.is_err() {
                warn!("work queue closed before all URLs were queued");
                break;
            }
        }

        drop(sender);
        self.transition(PoolState::Draining);

        let mut summary = RunSummary::default();
        for result in join_all(handles).await {
            match result {
                Ok(stats) => summary.add(stats),
                Err(err) => warn!(error = %err, "worker task failed"),
            }
        }

        self.transition(PoolState::Done);
        summary
    }

    fn transition(&mut self, next: PoolState) {
        debug!(from = ?self.state, to = ?next, "pool state change");
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::output::SharedBuffer;
    use crate::snippet::Highlight;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::collections::HashMap;

    // Serves canned bodies or status codes and counts every call
    #[derive(Default)]
    struct StubFetcher {
        pages: HashMap<String, Result<String, u16>>,
        calls: std::sync::Mutex<HashMap<String, usize>>,
    }

    impl StubFetcher {
        fn page(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), Ok(body.to_string()));
            self
        }

        fn status(mut self, url: &str, code: u16) -> Self {
            self.pages.insert(url.to_string(), Err(code));
            self
        }
    }

    #[async_trait]
    impl Fetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            *self.calls.lock().unwrap().entry(url.to_string()).or_default() += 1;
            tokio::task::yield_now().await;

            match self.pages.get(url) {
                Some(Ok(body)) => Ok(body.clone()),
                Some(Err(code)) => Err(FetchError::Status(StatusCode::from_u16(*code).unwrap())),
                None => Err(FetchError::Status(StatusCode::NOT_FOUND)),
            }
        }
    }

    fn test_config(worker_count: usize) -> Config {
        Config {
            worker_count,
            highlight: Highlight::brackets(),
            ..Config::default()
        }
    }

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|url| url.to_string()).collect()
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_other_urls() {
        let fetcher = StubFetcher::default()
            .page("http://a.test/", "hello from a")
            .status("http://b.test/", 404)
            .page("http://c.test/", "c says hello");

        let buffer = SharedBuffer::default();
        let config = test_config(10);
        let printer = Printer::new(&config, buffer.clone());
        let mut dispatcher = Dispatcher::new(config, fetcher, printer);

        let summary = dispatcher
            .run(urls(&["http://a.test/", "http://b.test/", "http://c.test/"]), "hello")
            .await;

        assert_eq!(summary.workers, 10);
        assert_eq!(summary.processed, 3);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.snippets, 2);

        let out = buffer.contents();
        assert_eq!(out.matches("Error: ").count(), 1);
        assert!(out.contains("Error: non-OK HTTP status: 404 Not Found"));
        assert!(out.contains("[URL] http://a.test/"));
        assert!(out.contains("[URL] http://c.test/"));
        assert!(!out.contains("[URL] http://b.test/"));
        assert_eq!(out.matches("Snippet:").count(), 2);
    }

    #[tokio::test]
    async fn test_empty_input_terminates_cleanly() {
        let buffer = SharedBuffer::default();
        let config = test_config(10);
        let printer = Printer::new(&config, buffer.clone());
        let mut dispatcher = Dispatcher::new(config, StubFetcher::default(), printer);
        assert_eq!(dispatcher.state(), PoolState::Created);

        let summary = dispatcher.run(Vec::new(), "hello").await;

        assert_eq!(dispatcher.state(), PoolState::Done);
        assert_eq!(summary.workers, 10);
        assert_eq!(summary.processed, 0);
        assert!(buffer.contents().is_empty());
    }

    #[tokio::test]
    async fn test_absent_keyword_prints_header_only() {
        let fetcher = StubFetcher::default().page("http://a.test/", "nothing to see");

        let buffer = SharedBuffer::default();
        let config = test_config(2);
        let printer = Printer::new(&config, buffer.clone());
        let mut dispatcher = Dispatcher::new(config, fetcher, printer);

        let summary = dispatcher.run(urls(&["http://a.test/"]), "zzz").await;

        assert_eq!(summary.snippets, 0);
        assert_eq!(summary.failed, 0);
        let out = buffer.contents();
        assert!(out.contains("[URL] http://a.test/"));
        assert!(!out.contains("Snippet:"));
        assert!(!out.contains("Error:"));
    }

    #[tokio::test]
    async fn test_every_url_fetched_exactly_once_under_backpressure() {
        let list: Vec<String> = (0..50).map(|i| format!("http://site{}.test/", i)).collect();
        let fetcher = list
            .iter()
            .fold(StubFetcher::default(), |fetcher, url| fetcher.page(url, "one key here"));
        let fetcher = Arc::new(fetcher);

        let config = test_config(3);
        let printer = Printer::new(&config, SharedBuffer::default());
        let mut dispatcher = Dispatcher {
            config,
            fetcher: fetcher.clone(),
            printer,
            state: PoolState::Created,
        };

        let summary = dispatcher.run(list.clone(), "key").await;

        assert_eq!(summary.workers, 3);
        assert_eq!(summary.processed, 50);
        assert_eq!(summary.snippets, 50);

        let calls = fetcher.calls.lock().unwrap();
        assert_eq!(calls.len(), 50);
        assert!(calls.values().all(|&count| count == 1));
    }

    #[tokio::test]
    async fn test_single_worker_pool() {
        let fetcher = StubFetcher::default()
            .page("http://a.test/", "key")
            .page("http://b.test/", "key key");

        let config = test_config(1);
        let printer = Printer::new(&config, SharedBuffer::default());
        let mut dispatcher = Dispatcher::new(config, fetcher, printer);

        let summary = dispatcher
            .run(urls(&["http://a.test/", "http://b.test/"]), "key")
            .await;

        assert_eq!(summary.workers, 1);
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.snippets, 3);
    }
}
