//! Log file discovery
//!
//! Lists the logs of one directory in the order reports are built: sorted
//! lexicographically by file name.

use crate::error::{AggregateError, Result};
use glob::{glob, Pattern};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Extension of ns-3 scenario logs
pub const DEFAULT_LOG_EXTENSION: &str = "log";

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext_lower = ext.to_ascii_lowercase();
            extensions
                .iter()
                .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(&ext_lower))
        })
        .unwrap_or(false)
}

/// Collect regular files in `dir` whose extension is one of `extensions`
/// (case-insensitive), sorted by file name.
///
/// A missing directory is an error; an empty one is not.
pub fn collect_log_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AggregateError::MissingDirectory(dir.to_path_buf()));
    }

    let pattern = format!("{}/*", Pattern::escape(&dir.to_string_lossy()));
    debug!("Scanning {pattern}");

    let mut files = Vec::new();
    for entry in glob(&pattern)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Cannot read entry in '{}': {}", dir.display(), e);
                continue;
            }
        };

        if !path.is_file() {
            continue;
        }
        if !has_extension(&path, extensions) {
            debug!("Skipping {path:?}: unsupported extension");
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("Found {} log files in {}", files.len(), dir.display());
    Ok(files)
}
