//! Log Store - monthly journal files
//!
//! Appends go to the end of the current month's file. Edit and delete only
//! ever touch the final line of that file and rewrite it in place by
//! truncating and overwriting. The rewrite is not atomic: a crash halfway
//! through can leave the file truncated.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};

use super::config::{StoreConfig, LOG_FILE_EXTENSION};
use crate::error::NotrResult;
use crate::types::{encode, encode_edit, Note};
use crate::utils::time::{Clock, SystemClock};

/// Result of an operation that needs an existing last entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome<T> {
    /// The current month's log file does not exist
    NoFile,
    /// The file exists but has no lines
    Empty,
    /// The operation ran
    Done(T),
}

/// Lines before and after an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced {
    pub previous: String,
    pub current: String,
}

/// Reads and writes the monthly log files
pub struct LogStore {
    config: StoreConfig,
    clock: Arc<dyn Clock>,
}

impl LogStore {
    /// Create a store on the system clock
    pub fn new(config: StoreConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a store with a custom clock
    pub fn with_clock(config: StoreConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// Create a store and make sure its log directory exists
    pub fn open(config: StoreConfig, clock: Arc<dyn Clock>) -> NotrResult<Self> {
        config.ensure_log_dir()?;
        Ok(Self::with_clock(config, clock))
    }

    /// Get the configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get the clock
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Path of the log file for the current month
    ///
    /// Resolved from the clock on every call.
    pub fn current_log_path(&self) -> PathBuf {
        self.config.log_path_for(self.clock.now())
    }

    /// Append a note to the current month's file
    ///
    /// Returns the line that was written (without newline).
    pub fn append(&self, note: &Note) -> NotrResult<String> {
        let now = self.clock.now();
        let path = self.config.log_path_for(now);
        self.config.ensure_log_dir()?;

        let line = encode(now, note);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{}", line)?;

        debug!("event=append file={} bytes={}", path.display(), line.len() + 1);
        Ok(line)
    }

    /// Read every line of the current month's file
    ///
    /// A missing file reads as empty.
    pub fn read_all(&self) -> NotrResult<Vec<String>> {
        Ok(read_lines(&self.current_log_path())?.unwrap_or_default())
    }

    /// The last line of the current month's file
    pub fn last_line(&self) -> NotrResult<MutationOutcome<String>> {
        let lines = match read_lines(&self.current_log_path())? {
            Some(lines) => lines,
            None => return Ok(MutationOutcome::NoFile),
        };
        Ok(match lines.last() {
            Some(last) => MutationOutcome::Done(last.clone()),
            None => MutationOutcome::Empty,
        })
    }

    /// Replace the last line of the current month's file with an edited entry
    ///
    /// The replacement carries the time of the edit and the `(edit) ` marker.
    pub fn replace_last(&self, note: &Note) -> NotrResult<MutationOutcome<Replaced>> {
        let now = self.clock.now();
        let path = self.config.log_path_for(now);

        let mut lines = match read_raw_lines(&path)? {
            Some(lines) => lines,
            None => return Ok(MutationOutcome::NoFile),
        };
        let Some(last) = lines.last_mut() else {
            return Ok(MutationOutcome::Empty);
        };

        let current = encode_edit(now, note);
        let previous = std::mem::replace(last, current.clone().into_bytes());
        rewrite_lines(&path, &lines)?;

        info!("event=edit_last file={}", path.display());
        Ok(MutationOutcome::Done(Replaced {
            previous: line_to_string(&previous),
            current,
        }))
    }

    /// Remove the last line of the current month's file
    ///
    /// Returns the removed line.
    pub fn remove_last(&self) -> NotrResult<MutationOutcome<String>> {
        let path = self.current_log_path();

        let mut lines = match read_raw_lines(&path)? {
            Some(lines) => lines,
            None => return Ok(MutationOutcome::NoFile),
        };
        let Some(removed) = lines.pop() else {
            return Ok(MutationOutcome::Empty);
        };
        rewrite_lines(&path, &lines)?;

        info!("event=delete_last file={} remaining={}", path.display(), lines.len());
        Ok(MutationOutcome::Done(line_to_string(&removed)))
    }

    /// All monthly log files, oldest first
    ///
    /// Ascending file name order is chronological order for `YYYY_MM.log`.
    /// A missing log directory yields an empty list.
    pub fn log_files(&self) -> NotrResult<Vec<PathBuf>> {
        let log_dir = self.config.log_dir();
        if !log_dir.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(log_dir)? {
            let path = entry?.path();
            if path.is_file()
                && path.extension().and_then(|s| s.to_str()) == Some(LOG_FILE_EXTENSION)
            {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

/// Read all lines of a file as bytes, or `None` if it does not exist
///
/// Lines keep their exact bytes minus the `\n` terminator, so a rewrite
/// leaves untouched lines byte-identical even when they are not valid UTF-8.
pub(crate) fn read_raw_lines(path: &Path) -> NotrResult<Option<Vec<Vec<u8>>>> {
    if !path.exists() {
        return Ok(None);
    }

    let mut reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    while reader.read_until(b'\n', &mut buf)? > 0 {
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        lines.push(std::mem::take(&mut buf));
    }
    Ok(Some(lines))
}

/// Read all lines of a file as text, or `None` if it does not exist
///
/// Invalid UTF-8 is replaced rather than failing the read.
pub(crate) fn read_lines(path: &Path) -> NotrResult<Option<Vec<String>>> {
    Ok(read_raw_lines(path)?.map(|lines| lines.iter().map(|l| line_to_string(l)).collect()))
}

/// Lossy text of a raw line, without a trailing `\r`
fn line_to_string(line: &[u8]) -> String {
    let text = String::from_utf8_lossy(line);
    text.strip_suffix('\r').unwrap_or(&text).to_string()
}

/// Truncate `path` and write `lines` back, one per line
fn rewrite_lines(path: &Path, lines: &[Vec<u8>]) -> NotrResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
