// src/pool/mod.rs
// =============================================================================
// This module runs the fixed-size worker pool.
//
// Submodules:
// - dispatcher: owns the queue, spawns workers, waits for them to finish
// - worker: the per-worker fetch -> extract -> print loop
//
// Rust concepts:
// - tokio::spawn: runs each worker as an independent task
// - mpsc channel: the bounded work queue
// - JoinHandle: lets the dispatcher wait for every worker
// =============================================================================

mod dispatcher;
mod worker;

pub use dispatcher::Dispatcher;
