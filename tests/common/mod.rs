// tests/common/mod.rs
//
// In-memory stand-in for the live grid: same pager-window behavior
// (reveal clicks extend the strip, the last few page anchors always
// resolve), same listing/detail view split, with injectable stale
// references, back-navigation failures, and per-row extraction faults.

#![allow(dead_code)]

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use cybar_scrape::error::{Error, Result};
use cybar_scrape::listing::Listing;
use cybar_scrape::record::{DetailFields, RowFields};

const INITIAL_WINDOW: u32 = 5;
const ALWAYS_RENDERED_TAIL: u32 = 3;

pub struct FakeState {
    pub max_page: u32,
    pub visible_hi: u32,
    pub current: u32,
    pub on_listing: bool,
    pub size_applied: bool,
    pub rows_per_page: Vec<usize>,
    pub open_detail: Option<(u32, usize)>,
    pub fail_details: HashSet<(u32, usize)>,
    pub stale_clicks: u32,
    pub fail_backs: u32,
    pub activations: u32,
}

pub struct FakeListing {
    state: Mutex<FakeState>,
}

impl FakeListing {
    pub fn new(max_page: u32, rows_per_page: Vec<usize>) -> Self {
        Self {
            state: Mutex::new(FakeState {
                max_page,
                visible_hi: INITIAL_WINDOW.min(max_page),
                current: 1,
                on_listing: true,
                size_applied: false,
                rows_per_page,
                open_detail: None,
                fail_details: HashSet::new(),
                stale_clicks: 0,
                fail_backs: 0,
                activations: 0,
            }),
        }
    }

    /// Next `n` pager activations raise a stale reference.
    pub fn with_stale_clicks(self, n: u32) -> Self {
        self.state.lock().unwrap().stale_clicks = n;
        self
    }

    /// Next `n` back navigations fail.
    pub fn with_failing_backs(self, n: u32) -> Self {
        self.state.lock().unwrap().fail_backs = n;
        self
    }

    /// Detail extraction for (page, row) fails.
    pub fn with_failing_detail(self, page: u32, row: usize) -> Self {
        self.state.lock().unwrap().fail_details.insert((page, row));
        self
    }

    pub fn set_current(&self, page: u32) {
        self.state.lock().unwrap().current = page;
    }

    pub fn activations(&self) -> u32 {
        self.state.lock().unwrap().activations
    }

    pub fn current(&self) -> u32 {
        self.state.lock().unwrap().current
    }

    fn rows_on(state: &FakeState, page: u32) -> usize {
        state
            .rows_per_page
            .get(page as usize - 1)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl Listing for FakeListing {
    async fn visible_pages(&self) -> Result<Vec<u32>> {
        let state = self.state.lock().unwrap();
        if !state.on_listing {
            return Err(Error::NotFound(s("pager strip (listing gone)")));
        }
        Ok((1..=state.visible_hi).collect())
    }

    async fn current_page(&self) -> Result<Option<u32>> {
        let state = self.state.lock().unwrap();
        Ok(state.on_listing.then_some(state.current))
    }

    async fn activate_page(&self, page: u32) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.stale_clicks > 0 {
            state.stale_clicks -= 1;
            return Err(Error::Stale);
        }
        if !state.on_listing {
            return Err(Error::NotFound(s("pager control (listing gone)")));
        }
        let always_rendered = page + ALWAYS_RENDERED_TAIL > state.max_page;
        if page > state.visible_hi && !always_rendered {
            return Err(Error::NotFound(format!("page control {page}")));
        }
        state.activations += 1;
        if page == state.visible_hi {
            // Reveal click: the strip extends past the clicked control.
            state.visible_hi = (state.visible_hi + INITIAL_WINDOW).min(state.max_page);
        }
        state.current = page;
        Ok(())
    }

    async fn await_current(&self, page: u32) -> Result<()> {
        let state = self.state.lock().unwrap();
        if state.on_listing && state.current == page {
            Ok(())
        } else {
            Err(Error::Timeout(format!("current-page indicator {page}")))
        }
    }

    async fn await_page_control(&self, page: u32) -> Result<()> {
        let state = self.state.lock().unwrap();
        if state.on_listing && page <= state.visible_hi {
            Ok(())
        } else {
            Err(Error::Timeout(format!("page control {page}")))
        }
    }

    async fn apply_page_size(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if !state.on_listing {
            return Err(Error::NotFound(s("page size button (listing gone)")));
        }
        state.size_applied = true;
        Ok(())
    }

    async fn at_listing(&self) -> Result<bool> {
        Ok(self.state.lock().unwrap().on_listing)
    }

    async fn back_to_listing(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_backs > 0 {
            state.fail_backs -= 1;
            return Err(Error::Timeout(s("listing root")));
        }
        // Back lands on a freshly rendered listing at page 1.
        state.on_listing = true;
        state.open_detail = None;
        state.current = 1;
        state.visible_hi = INITIAL_WINDOW.min(state.max_page);
        state.size_applied = false;
        Ok(())
    }

    async fn row_count(&self) -> Result<usize> {
        let state = self.state.lock().unwrap();
        if !state.on_listing {
            return Err(Error::NotFound(s("rows (listing gone)")));
        }
        Ok(Self::rows_on(&state, state.current))
    }

    async fn read_row(&self, index: usize) -> Result<RowFields> {
        let state = self.state.lock().unwrap();
        if !state.on_listing {
            return Err(Error::NotFound(s("row (listing gone)")));
        }
        if index >= Self::rows_on(&state, state.current) {
            return Err(Error::NotFound(format!("row {index}")));
        }
        let page = state.current;
        Ok(RowFields {
            full_name: format!("Lawyer {page}-{index}"),
            greek_name: format!("Δικηγόρος {page}-{index}"),
            phone: format!("22{page:02}{index:04}"),
            fax: format!("23{page:02}{index:04}"),
            court_box: format!("{index}"),
            province: s("Nicosia"),
        })
    }

    async fn open_details(&self, index: usize) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if !state.on_listing {
            return Err(Error::NotFound(s("details link (listing gone)")));
        }
        if index >= Self::rows_on(&state, state.current) {
            return Err(Error::NotFound(format!("details link {index}")));
        }
        state.open_detail = Some((state.current, index));
        state.on_listing = false;
        Ok(())
    }

    async fn read_details(&self) -> Result<DetailFields> {
        let state = self.state.lock().unwrap();
        let (page, index) = state
            .open_detail
            .ok_or_else(|| Error::NotFound(s("detail view")))?;
        if state.fail_details.contains(&(page, index)) {
            return Err(Error::NotFound(s("detail name field")));
        }
        Ok(DetailFields {
            alternative_name: format!("Alt {page}-{index}"),
            address: format!("{index} Court St"),
            postal_code: s("1010"),
            email: format!("lawyer{page}x{index}@example.com"),
            url: s(""),
            mobile: format!("99{page:02}{index:04}"),
        })
    }
}

fn s(text: &str) -> String {
    text.to_string()
}

/// Scratch directory under the system temp dir, wiped per test.
pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("cybar_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}
