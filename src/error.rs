// src/error.rs

use thirtyfour::error::WebDriverError;

use crate::config::consts::MAX_PAGE;

pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level error. `Stale` and `Timeout` get their own variants because
/// the pagination walker retries the former and treats the latter as a
/// bounded-wait failure; everything else from the browser session rides in
/// `WebDriver`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("page {0} exceeds the maximum page count {MAX_PAGE}")]
    PageOutOfRange(u32),

    #[error("pager strip has no numbered controls")]
    PagerEmpty,

    #[error("stale element reference")]
    Stale,

    #[error("timed out: {0}")]
    Timeout(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("gave up after {attempts} stale-element retries walking to page {page}")]
    RetriesExhausted { page: u32, attempts: u32 },

    #[error("webdriver: {0}")]
    WebDriver(WebDriverError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<WebDriverError> for Error {
    fn from(e: WebDriverError) -> Self {
        match e {
            WebDriverError::StaleElementReference(_) => Error::Stale,
            WebDriverError::NoSuchElement(info) => Error::NotFound(info.error),
            WebDriverError::Timeout(msg) => Error::Timeout(msg),
            other => Error::WebDriver(other),
        }
    }
}

impl Error {
    /// True for the transient reference failures the walker may retry.
    pub fn is_stale(&self) -> bool {
        matches!(self, Error::Stale)
    }
}
