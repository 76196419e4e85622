//! Input record stream: pipe-delimited contribution lines from a file

use crate::analytics_core::RawRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load well-formed raw records from `path`, in file order.
///
/// A line is forwarded only if it splits into exactly 21 pipe-separated
/// fields; anything else is dropped before structural validation. A
/// missing or unreadable input is reported and yields an empty stream
/// rather than an error, so the run still completes.
pub fn load_transactions(path: &Path) -> Vec<RawRecord> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            log::warn!(
                "⚠️ transaction file not found: {} ({})",
                path.display(),
                err
            );
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::warn!("⚠️ stopped reading {}: {}", path.display(), err);
                break;
            }
        };
        match RawRecord::from_line(&line) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    log::info!(
        "📖 Loaded {} well-formed records from {} ({} malformed lines dropped)",
        records.len(),
        path.display(),
        dropped
    );
    records
}
