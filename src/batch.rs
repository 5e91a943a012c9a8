//! Whole-directory processing: scan, parse every log, build both reports

use crate::error::Result;
use crate::input::collect_log_files;
use crate::parser::parse_log_file;
use crate::report::{build_reports, Reports};
use crate::types::ParsedEntry;
use log::debug;
use std::path::{Path, PathBuf};

/// Result of aggregating one directory of logs
#[derive(Debug, Clone, Default)]
pub struct Batch {
    /// Logs found, in processing order
    pub files: Vec<PathBuf>,
    /// Entries of the logs that held metrics, same order as `files`
    pub entries: Vec<ParsedEntry>,
    pub reports: Reports,
}

/// Parse `paths` in order, dropping logs without metrics.
///
/// The first malformed log aborts the whole batch.
pub fn parse_logs(paths: &[PathBuf]) -> Result<Vec<ParsedEntry>> {
    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        debug!("Processing: {}", path.display());
        if let Some(entry) = parse_log_file(path)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Aggregate every log in `dir` carrying one of `extensions`
pub fn aggregate_directory(dir: &Path, extensions: &[String]) -> Result<Batch> {
    let files = collect_log_files(dir, extensions)?;
    let entries = parse_logs(&files)?;
    let reports = build_reports(&entries);

    debug!(
        "{} logs, {} entries, {} ax rows, {} be rows",
        files.len(),
        entries.len(),
        reports.legacy_ax.len(),
        reports.legacy_be.len()
    );

    Ok(Batch {
        files,
        entries,
        reports,
    })
}
