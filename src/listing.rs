// src/listing.rs
//
// Seam between the walker/driver logic and the browser. The live grid
// (grid.rs) implements this over a WebDriver session; tests drive the same
// logic against an in-memory fake. All waits inside implementations are
// bounded by the configured timeout.

use async_trait::async_trait;

use crate::error::Result;
use crate::record::{DetailFields, RowFields};

#[async_trait]
pub trait Listing: Send + Sync {
    /// Page numbers currently shown in the pager strip, in order, with the
    /// reserved next-block tail controls excluded.
    async fn visible_pages(&self) -> Result<Vec<u32>>;

    /// Page number the current-page indicator shows, if any.
    async fn current_page(&self) -> Result<Option<u32>>;

    /// Activate the numbered control whose handler encodes `page - 1`.
    async fn activate_page(&self, page: u32) -> Result<()>;

    /// Wait until the current-page indicator equals `page`.
    async fn await_current(&self, page: u32) -> Result<()>;

    /// Wait until a numbered control for `page` is present (used after a
    /// reveal click on the highest visible control).
    async fn await_page_control(&self, page: u32) -> Result<()>;

    /// Apply the rows-per-page preference and wait for the grid to refill.
    async fn apply_page_size(&self) -> Result<()>;

    /// True when the listing's root element is present.
    async fn at_listing(&self) -> Result<bool>;

    /// Issue a browser back and wait for the listing root to reappear.
    async fn back_to_listing(&self) -> Result<()>;

    /// Number of data rows on the current page.
    async fn row_count(&self) -> Result<usize>;

    /// Re-resolve row `index` fresh and read its six fixed-position cells.
    async fn read_row(&self, index: usize) -> Result<RowFields>;

    /// Activate row `index`'s detail link and wait for the detail view.
    async fn open_details(&self, index: usize) -> Result<()>;

    /// Read the six detail fields by fixed identifier.
    async fn read_details(&self) -> Result<DetailFields>;
}
