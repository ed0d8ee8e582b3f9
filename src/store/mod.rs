//! Log Store Module
//!
//! This module owns everything that touches the journal files on disk:
//! - `StoreConfig`: Resolves a point in time to its monthly log file
//! - `LogStore`: Appends entries and edits or deletes the last one
//!
//! # Layout
//!
//! ```text
//! ~/.notr/logs/
//! ├── 2024_01.log    [2024-01-03 09:12] Kickoff #planning
//! ├── 2024_02.log    ...
//! └── 2024_03.log    <- current month: append / edit-last / delete-last
//! ```
//!
//! Every operation re-derives the current file from the clock, so a command
//! issued just after midnight on the 1st targets the new (possibly empty)
//! month.

mod config;
mod store;

pub use config::{StoreConfig, LOG_FILE_EXTENSION, LOG_FILE_FORMAT};
pub(crate) use store::{read_lines, read_raw_lines};
pub use store::{LogStore, MutationOutcome, Replaced};
