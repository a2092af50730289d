// src/progress.rs
/// Lightweight progress reporting for long-running scrapes.
/// Frontends implement this to surface status to users.
use std::path::Path;

pub trait Progress {
    /// Called at the start with the number of worker chunks.
    fn begin(&mut self, _total_chunks: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One chunk finished; `records` rows landed in `path`.
    fn chunk_done(&mut self, _pages: (u32, u32), _path: &Path, _records: usize) {}

    /// One chunk gave up (session or pagination failure).
    fn chunk_failed(&mut self, _pages: (u32, u32), _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
