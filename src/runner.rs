// src/runner.rs
//
// Drives the whole scrape: per-page state machine over the listing seam,
// navigation recovery between rows, and the fan-out of page-range chunks
// onto independent worker sessions.
//
// Failure policy (the two source variants disagreed; this is the one rule
// for both): a pagination failure entering a page aborts the remaining
// pages of that worker's chunk, because the pager state can no longer be
// trusted. A recovery failure mid-page abandons only that page's remaining
// rows and moves on; the next page starts from a fresh walk.

use std::path::PathBuf;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::error::{Error, Result};
use crate::file::{self, RecordSink};
use crate::grid::Grid;
use crate::listing::Listing;
use crate::pager;
use crate::params::Params;
use crate::progress::Progress;
use crate::record::LawyerRecord;
use crate::retry::RetryPolicy;
use crate::session::Session;

/// Per-page progression. A detail view replaces the listing, so every row
/// ends with a return-to-listing leg before the next row starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PageState {
    Paginating,
    RowsPending { next: usize, total: usize },
    RowDone { next: usize, total: usize },
    ReturnToListing { next: usize, total: usize },
    PageComplete,
    PaginationFailed,
    RecoveryFailed,
}

/// What one worker's page range produced.
#[derive(Clone, Debug, Default)]
pub struct RangeSummary {
    pub records: usize,
    pub rows_skipped: usize,
    /// Pages abandoned after a mid-page recovery failure.
    pub pages_abandoned: Vec<u32>,
    /// Set when a pagination failure stopped the chunk early.
    pub aborted_at: Option<u32>,
}

/// Summary of what a whole run produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub records: usize,
    pub chunks_failed: usize,
}

/// Extract one row: six listing cells, then the detail view behind the
/// row's action link. Any failure yields None; the caller logs and the
/// loop continues with the next row.
pub async fn extract_row(listing: &dyn Listing, index: usize) -> Option<LawyerRecord> {
    let attempt = async {
        let row = listing.read_row(index).await?;
        listing.open_details(index).await?;
        let details = listing.read_details().await?;
        Ok::<_, Error>(LawyerRecord::merge(row, details))
    };
    match attempt.await {
        Ok(record) => Some(record),
        Err(e) => {
            loge!("Row {index}: {e}");
            None
        }
    }
}

/// Navigation recovery: get back onto the listing at `page`. Idempotent
/// when the listing is already current; the back action is only issued
/// when the listing root is actually gone.
pub async fn return_to_page(listing: &dyn Listing, page: u32, retry: &RetryPolicy) -> Result<()> {
    if !listing.at_listing().await? {
        listing.back_to_listing().await?;
    }
    listing.apply_page_size().await?;
    pager::goto_page(listing, page, retry).await
}

/// Walk `start..=end`, appending one merged record per extracted row.
pub async fn scrape_pages(
    listing: &dyn Listing,
    sink: &RecordSink,
    start: u32,
    end: u32,
    retry: &RetryPolicy,
) -> Result<RangeSummary> {
    let mut summary = RangeSummary::default();

    'pages: for page in start..=end {
        let mut state = PageState::Paginating;
        loop {
            state = match state {
                PageState::Paginating => match return_to_page(listing, page, retry).await {
                    Ok(()) => {
                        let total = listing.row_count().await?;
                        logf!("Page {page}: {total} rows");
                        PageState::RowsPending { next: 0, total }
                    }
                    Err(e) => {
                        loge!("Pagination to page {page} failed: {e}");
                        PageState::PaginationFailed
                    }
                },
                PageState::RowsPending { next, total } => {
                    if next >= total {
                        PageState::PageComplete
                    } else {
                        match extract_row(listing, next).await {
                            Some(record) => {
                                sink.append(&record)?;
                                summary.records += 1;
                            }
                            None => summary.rows_skipped += 1,
                        }
                        PageState::RowDone { next, total }
                    }
                }
                PageState::RowDone { next, total } => PageState::ReturnToListing { next, total },
                PageState::ReturnToListing { next, total } => {
                    match return_to_page(listing, page, retry).await {
                        Ok(()) => PageState::RowsPending { next: next + 1, total },
                        Err(e) => {
                            loge!("Recovery to page {page} failed: {e}");
                            PageState::RecoveryFailed
                        }
                    }
                }
                PageState::PageComplete => continue 'pages,
                PageState::PaginationFailed => {
                    summary.aborted_at = Some(page);
                    break 'pages;
                }
                PageState::RecoveryFailed => {
                    summary.pages_abandoned.push(page);
                    continue 'pages;
                }
            };
        }
    }

    Ok(summary)
}

/// Split an inclusive page range into chunks of at most `chunk_size` pages.
pub fn chunk_ranges(start: u32, end: u32, chunk_size: u32) -> Vec<(u32, u32)> {
    let chunk = chunk_size.max(1);
    let mut out = Vec::new();
    let mut lo = start;
    while lo <= end {
        let hi = end.min(lo + chunk - 1);
        out.push((lo, hi));
        lo = hi + 1;
    }
    out
}

struct ChunkReport {
    path: PathBuf,
    summary: RangeSummary,
}

/// One worker: own session, own sink, strictly sequential state machine.
/// The session is released on every exit path before the result propagates.
async fn run_chunk(params: Params, start: u32, end: u32, path: PathBuf) -> Result<ChunkReport> {
    let sink = RecordSink::create(&path)?; // header first, before any row processing

    let session = Session::connect(&params).await?;
    let grid = Grid::new(session.driver().clone(), params.page_size);
    let scraped = scrape_pages(&grid, &sink, start, end, &RetryPolicy::default()).await;
    let closed = session.close().await;

    let summary = scraped?;
    closed?;
    Ok(ChunkReport { path, summary })
}

/// Top-level runner. A chunk size covering the whole range gives the
/// strictly sequential single-session variant; anything smaller fans the
/// chunks out as parallel tasks, one independent session and output file
/// each, with no cross-worker coordination or ordering.
pub async fn run(params: &Params, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    file::ensure_directory(&params.out_dir)?;
    crate::log::set_log_dir(&params.out_dir);

    let chunks = chunk_ranges(params.start, params.end, params.chunk_size);
    let stamp = file::run_timestamp();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(chunks.len());
        p.log(&format!(
            "Scraping pages {}-{} in {} chunk(s)",
            params.start,
            params.end,
            chunks.len()
        ));
    }
    logf!(
        "Run start: pages {}-{}, {} chunk(s), out {}",
        params.start,
        params.end,
        chunks.len(),
        params.out_dir.display()
    );

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut workers = JoinSet::new();
    for (lo, hi) in chunks {
        let tx = tx.clone();
        let params = params.clone();
        let path = params.out_dir.join(file::chunk_filename(&stamp, lo, hi));
        workers.spawn(async move {
            let result = run_chunk(params, lo, hi, path).await;
            let _ = tx.send((lo, hi, result));
        });
    }
    drop(tx); // workers hold the remaining senders

    let mut summary = RunSummary { files_written: Vec::new(), records: 0, chunks_failed: 0 };
    while let Some((lo, hi, result)) = rx.recv().await {
        match result {
            Ok(report) => {
                summary.records += report.summary.records;
                if let Some(page) = report.summary.aborted_at {
                    loge!("Chunk {lo}-{hi}: aborted at page {page}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.chunk_failed((lo, hi), &format!("pagination failed at page {page}"));
                    }
                    summary.chunks_failed += 1;
                } else if let Some(p) = progress.as_deref_mut() {
                    p.chunk_done((lo, hi), &report.path, report.summary.records);
                }
                for page in &report.summary.pages_abandoned {
                    loge!("Chunk {lo}-{hi}: page {page} abandoned mid-rows");
                }
                summary.files_written.push(report.path);
            }
            Err(e) => {
                loge!("Chunk {lo}-{hi} failed: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.chunk_failed((lo, hi), &e.to_string());
                }
                summary.chunks_failed += 1;
            }
        }
    }
    while workers.join_next().await.is_some() {}

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("Run done: {} records, {} chunk(s) failed", summary.records, summary.chunks_failed);
    Ok(summary)
}
