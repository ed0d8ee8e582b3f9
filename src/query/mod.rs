//! Query Engine
//!
//! Read-only access to the journal:
//! - `QueryEngine::scan`: every monthly file, filtered by time window,
//!   search term and tag
//! - `QueryEngine::recent_tail`: the last N lines of the current month
//! - `export_entries`: write scan results to a file

mod engine;
mod export;
mod filter;

pub use engine::{QueryEngine, Tail, DEFAULT_TAIL_COUNT, DEFAULT_WINDOW_HOURS};
pub use export::export_entries;
pub use filter::{parse_since, ScanFilter};
