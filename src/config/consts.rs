// src/config/consts.rs

use std::time::Duration;

// Target site
pub const DIRECTORY_URL: &str = "https://www.cyprusbar.org/CypriotAdvocateMembersPage";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

// Pager shape. The grid reserves the last few pager controls for the
// "next block" arrows; anchors close to the last page are always rendered.
pub const MAX_PAGE: u32 = 55;
pub const TRAILING_WINDOW: u32 = 53;
pub const RESERVED_TAIL: usize = 3;
pub const DEFAULT_PAGE_SIZE: u32 = 80;

// Waits & retries
pub const WAIT_TIMEOUT: Duration = Duration::from_secs(10);
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);
pub const STALE_RETRIES: u32 = 3;
pub const SCROLL_SETTLE_MS: u64 = 200;
// Sticky header height; clicks land under it without this offset.
pub const HEADER_SCROLL_BACK_PX: i64 = 150;

// Run shape
pub const DEFAULT_START_PAGE: u32 = 1;
pub const DEFAULT_END_PAGE: u32 = MAX_PAGE;
pub const DEFAULT_CHUNK_SIZE: u32 = 5;
pub const DEFAULT_OUT_DIR: &str = "out";
pub const FILE_STEM: &str = "lawyers";
