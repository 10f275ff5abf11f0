//! Append-only payroll log.
//!
//! The log is a single plain-text file. Every saved statement is appended as
//! a block made of a divider line, a `Date and Time:` header, the statement
//! text and a blank line:
//!
//! ```text
//! ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
//! Date and Time: 2026-10-18 09:30:00
//! Employee ID: 1
//! ...
//! Total Salary: 10000
//!
//! ```
//!
//! The file is opened and closed around every operation; nothing is held
//! between calls.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{PayrollError, PayrollResult};

/// Line written before every entry.
pub const DIVIDER: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";

/// Timestamp format of the `Date and Time:` header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TIMESTAMP_PREFIX: &str = "Date and Time: ";

/// Default log file name.
pub const DEFAULT_LOG_PATH: &str = "payroll.txt";

/// One block read back from the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the block was appended.
    pub recorded_at: NaiveDateTime,
    /// The statement text, newline-terminated.
    pub body: String,
}

/// Handle to the payroll log file.
///
/// # Examples
///
/// ```no_run
/// use payroll_desk::payroll_log::PayrollLog;
///
/// let log = PayrollLog::new("payroll.txt");
/// log.append("Employee ID: 1\nTotal Salary: 10000\n")?;
/// println!("{}", log.read_all()?);
/// # Ok::<(), payroll_desk::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollLog {
    path: PathBuf,
}

impl PayrollLog {
    /// Creates a handle for the log at `path`. The file is not touched.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends an entry stamped with the current local time.
    pub fn append(&self, entry_text: &str) -> PayrollResult<()> {
        self.append_at(entry_text, Local::now().naive_local())
    }

    /// Appends an entry stamped with `timestamp`.
    ///
    /// The whole block is written with a single call, so a failed append
    /// leaves earlier content as it was. Empty entries are rejected before
    /// the file is opened.
    pub fn append_at(&self, entry_text: &str, timestamp: NaiveDateTime) -> PayrollResult<()> {
        if entry_text.trim().is_empty() {
            return Err(PayrollError::Validation {
                field: "entry".to_string(),
                message: "No data to save.".to_string(),
            });
        }

        let block = format_block(entry_text, timestamp);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(block.as_bytes())
            .map_err(|e| self.io_error(e))?;

        info!(
            path = %self.path.display(),
            bytes = block.len(),
            "Payroll entry appended"
        );
        Ok(())
    }

    /// Returns the full contents of the log.
    ///
    /// Fails if the log has never been written or cannot be opened.
    pub fn read_all(&self) -> PayrollResult<String> {
        fs::read_to_string(&self.path).map_err(|e| self.io_error(e))
    }

    /// Reads the log back as parsed entries, oldest first.
    ///
    /// Blocks whose header cannot be parsed are skipped.
    pub fn entries(&self) -> PayrollResult<Vec<LogEntry>> {
        let contents = self.read_all()?;
        Ok(parse_entries(&contents))
    }

    fn io_error(&self, error: std::io::Error) -> PayrollError {
        warn!(path = %self.path.display(), error = %error, "Payroll log access failed");
        PayrollError::Io {
            path: self.path.display().to_string(),
            message: error.to_string(),
        }
    }
}

fn format_block(entry_text: &str, timestamp: NaiveDateTime) -> String {
    let mut block = format!(
        "{DIVIDER}\n{TIMESTAMP_PREFIX}{}\n{entry_text}",
        timestamp.format(TIMESTAMP_FORMAT)
    );
    if !entry_text.ends_with('\n') {
        block.push('\n');
    }
    block.push('\n');
    block
}

fn parse_entries(contents: &str) -> Vec<LogEntry> {
    let separator = format!("{DIVIDER}\n");

    contents
        .split(separator.as_str())
        .skip(1)
        .filter_map(|block| {
            let (header, body) = block.split_once('\n').unwrap_or((block, ""));
            let stamp = header.strip_prefix(TIMESTAMP_PREFIX).unwrap_or(header);

            match NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT) {
                Ok(recorded_at) => {
                    let body = body
                        .strip_suffix('\n')
                        .filter(|b| b.ends_with('\n'))
                        .unwrap_or(body);
                    Some(LogEntry {
                        recorded_at,
                        body: body.to_string(),
                    })
                }
                Err(e) => {
                    warn!(header, error = %e, "Skipping log block with unreadable header");
                    None
                }
            }
        })
        .collect()
}
