//! Export of scan results

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::NotrResult;
use crate::types::Entry;

/// Write entries to `path`, one verbatim line each, replacing any existing content
pub fn export_entries<P: AsRef<Path>>(entries: &[Entry], path: P) -> NotrResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    for entry in entries {
        writeln!(writer, "{}", entry.raw)?;
    }
    writer.flush()?;

    info!("event=export file={} entries={}", path.display(), entries.len());
    Ok(())
}
