use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Kind of data file, selecting the downstream parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Per-day activity log (`<uid>_<YYYY>-<M>-<D>.log`).
    Log,
    /// Per-month summary (`<uid>_<YYYY>-<M>.csv`).
    Csv,
}

impl FileType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Log => "log",
            FileType::Csv => "csv",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized data file discovered by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    /// Absolute path of the source file.
    pub file_path: PathBuf,
    /// Base name, used for ordering and display.
    pub file_name: String,
    pub file_type: FileType,
    /// Streamer UID as written in the filename (digits, never parsed).
    pub uid: String,
    /// `YYYY-MM-DD` for logs, `YYYY-MM` for summaries.
    pub date_str: String,
    /// Size in bytes at scan time.
    pub file_size: u64,
}
