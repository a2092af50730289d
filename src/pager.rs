// src/pager.rs
//
// Pagination walker. The pager strip only shows a window of numbered
// controls; clicking the highest visible one reveals the next window, so
// reaching a far page is a chain of reveal clicks followed by one activation.

use crate::config::consts::{MAX_PAGE, TRAILING_WINDOW};
use crate::error::{Error, Result};
use crate::listing::Listing;
use crate::retry::RetryPolicy;

/// Walk the pager until `target` is current.
///
/// Page 1 is where the listing starts, so it trivially succeeds; targets
/// beyond MAX_PAGE fail before any navigation. Stale references from a
/// pager strip that re-rendered under us are retried up to
/// `retry.max_attempts`, then reported as a hard failure.
pub async fn goto_page(listing: &dyn Listing, target: u32, retry: &RetryPolicy) -> Result<()> {
    if target > MAX_PAGE {
        return Err(Error::PageOutOfRange(target));
    }
    if target == 1 {
        return Ok(());
    }
    if listing.current_page().await? == Some(target) {
        return Ok(());
    }

    logd!("Walking to page {target}");
    let mut stale_seen = 0u32;

    loop {
        match walk_step(listing, target).await {
            Ok(true) => return Ok(()),
            Ok(false) => continue,
            Err(e) if e.is_stale() => {
                stale_seen += 1;
                if stale_seen > retry.max_attempts {
                    loge!("Stale retries exhausted walking to page {target}");
                    return Err(Error::RetriesExhausted {
                        page: target,
                        attempts: stale_seen,
                    });
                }
                logd!("Stale pager control, retrying ({stale_seen}/{})", retry.max_attempts);
                retry.pause().await;
            }
            Err(e) => {
                loge!("Walk to page {target} failed: {e}");
                return Err(e);
            }
        }
    }
}

/// One evaluation of the pager strip. Ok(true) = target reached,
/// Ok(false) = a reveal click happened and the strip must be re-read.
async fn walk_step(listing: &dyn Listing, target: u32) -> Result<bool> {
    let visible = listing.visible_pages().await?;
    let highest = visible.last().copied().ok_or(Error::PagerEmpty)?;

    // Controls for the last pages are always rendered, even when the
    // window has not been revealed out that far yet.
    if target <= highest || target >= TRAILING_WINDOW {
        listing.activate_page(target).await?;
        listing.await_current(target).await?;
        Ok(true)
    } else {
        logd!("Revealing past page {highest}");
        listing.activate_page(highest).await?;
        listing.await_page_control(highest + 1).await?;
        Ok(false)
    }
}
