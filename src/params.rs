// src/params.rs
use std::path::PathBuf;

use crate::config::consts::*;

#[derive(Clone, Debug)]
pub struct Params {
    pub start: u32,              // first listing page to scrape
    pub end: u32,                // last listing page (inclusive)
    pub chunk_size: u32,         // pages per worker session
    pub out_dir: PathBuf,        // directory for the per-chunk CSV files
    pub webdriver_url: String,   // chromedriver endpoint
    pub headless: bool,
    pub page_size: u32,          // listing rows per page preference
}

impl Params {
    pub fn new() -> Self {
        Self {
            start: DEFAULT_START_PAGE,
            end: DEFAULT_END_PAGE,
            chunk_size: DEFAULT_CHUNK_SIZE,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            webdriver_url: s!(DEFAULT_WEBDRIVER_URL),
            headless: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
