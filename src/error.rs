use std::fmt;
use std::path::PathBuf;

/// Error types for log aggregation
#[derive(Debug)]
pub enum AggregateError {
    /// I/O errors, tagged with the path being read or written
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A matching line carried numeric text that does not parse
    Parse {
        scenario: String,
        line: usize,
        message: String,
    },
    /// The log directory does not exist
    MissingDirectory(PathBuf),
    /// Invalid glob pattern built from the log directory
    Pattern(String),
    /// Export format error
    Export(String),
}

impl AggregateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AggregateError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            AggregateError::Parse {
                scenario,
                line,
                message,
            } => write!(f, "Parse error in {} line {}: {}", scenario, line, message),
            AggregateError::MissingDirectory(path) => {
                write!(f, "Log directory not found: {}", path.display())
            }
            AggregateError::Pattern(msg) => write!(f, "Invalid pattern: {}", msg),
            AggregateError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for AggregateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AggregateError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<glob::PatternError> for AggregateError {
    fn from(err: glob::PatternError) -> Self {
        AggregateError::Pattern(err.to_string())
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for AggregateError {
    fn from(err: csv::Error) -> Self {
        AggregateError::Export(err.to_string())
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for AggregateError {
    fn from(err: serde_json::Error) -> Self {
        AggregateError::Export(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AggregateError>;
