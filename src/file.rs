// src/file.rs

use std::{
    fs::{File, OpenOptions, self},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::FILE_STEM;
use crate::csv::write_row;
use crate::error::Result;
use crate::record::LawyerRecord;

const SEP: char = ',';

/// Append-only CSV sink for merged records. Creating the sink writes the
/// header row immediately, before any row processing starts, so an aborted
/// run still leaves a well-formed file.
#[derive(Clone, Debug)]
pub struct RecordSink {
    path: PathBuf,
}

impl RecordSink {
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        let file = File::create(path)?; // truncate/overwrite
        let mut out = BufWriter::new(file);
        write_row(&mut out, &LawyerRecord::headers(), SEP)?;
        out.flush()?;
        Ok(Self { path: path.to_path_buf() })
    }

    /// Append one merged record. Reopens per call; each worker owns its file
    /// and rows survive even if the session dies mid-page.
    pub fn append(&self, record: &LawyerRecord) -> Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut out = BufWriter::new(file);
        write_row(&mut out, &record.to_row(), SEP)?;
        out.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotADirectory,
            format!("path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// `lawyers_{timestamp}_{start}_{end}.csv`, one per worker chunk.
pub fn chunk_filename(stamp: &str, start: u32, end: u32) -> String {
    format!("{FILE_STEM}_{stamp}_{start}_{end}.csv")
}

/// Timestamp shared by all files of one run.
pub fn run_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}
