//! Output record sink: snapshot lines written in emission order

use crate::analytics_core::SnapshotRecord;
use std::fs::{self, File};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::Path;

/// Write snapshot records to `path`, one per line, in emission order.
///
/// If the destination directory does not exist yet it is created and the
/// write retried once.
pub fn write_snapshots(path: &Path, records: &[SnapshotRecord]) -> io::Result<()> {
    match try_write(path, records) {
        Err(err) if err.kind() == ErrorKind::NotFound => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            try_write(path, records)
        }
        result => result,
    }
}

fn try_write(path: &Path, records: &[SnapshotRecord]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    writer.flush()?;
    log::info!(
        "📝 Wrote {} snapshot records to {}",
        records.len(),
        path.display()
    );
    Ok(())
}
