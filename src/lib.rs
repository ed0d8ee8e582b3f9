//! notr - a personal command-line journal
//!
//! Notes are appended as timestamped lines to one plain-text file per
//! calendar month. The most recent note can be edited or deleted, and all
//! months can be queried by time window, keyword and `#tag`.
//!
//! # Modules
//!
//! - `types`: Line codec (`Note`, `Entry`)
//! - `store`: Monthly file resolution and the append/edit/delete store
//! - `query`: Multi-file scan, current-month tail and export
//! - `session`: Interactive command loop
//! - `config`: Defaults, config file and environment overrides
//! - `logging`: Diagnostic logger setup
//! - `utils`: Clock abstraction
//!
//! # Example
//!
//! ```no_run
//! use notr::{LogStore, Note, QueryEngine, ScanFilter, StoreConfig};
//!
//! fn main() -> notr::NotrResult<()> {
//!     let store = LogStore::new(StoreConfig::new("/tmp/notr-logs"));
//!     store.append(&Note::new("Deployed service #deploy")?)?;
//!
//!     let engine = QueryEngine::new(&store);
//!     for entry in engine.scan(&ScanFilter::new().tag("deploy"))? {
//!         println!("{}", entry.raw);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod query;
pub mod session;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::Config;
pub use error::{NotrError, NotrResult};
pub use query::{export_entries, parse_since, QueryEngine, ScanFilter, Tail};
pub use session::{Command, Session, SessionState};
pub use store::{LogStore, MutationOutcome, Replaced, StoreConfig};
pub use types::{Entry, Note};
pub use utils::{Clock, FixedClock, SystemClock};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
