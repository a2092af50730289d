// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod csv;
pub mod error;
pub mod file;
pub mod grid;
pub mod listing;
pub mod pager;
pub mod params;
pub mod progress;
pub mod record;
pub mod retry;
pub mod runner;
pub mod session;
