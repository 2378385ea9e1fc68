// WellScope - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal
// chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Gateway errors
// ---------------------------------------------------------------------------

/// Errors produced by the remote data gateway.
///
/// Transport failures and backend-reported failures are deliberately kept in
/// one type: call sites decide which UI channel a failure reaches, not where
/// it originated.
#[derive(Debug)]
pub enum GatewayError {
    /// The request could not be sent or the response could not be read.
    Http { source: reqwest::Error },

    /// The backend answered with a non-success status. `detail` carries the
    /// backend's own explanation when the error body had one.
    Status {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },

    /// The response body did not match the expected shape.
    Decode {
        endpoint: &'static str,
        source: serde_json::Error,
    },

    /// The upload file could not be read from disk.
    Io { path: PathBuf, source: io::Error },

    /// The upload file exceeds the client-side size cap.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },
}

impl GatewayError {
    /// The backend-provided failure reason, if the backend supplied one.
    ///
    /// Upload messages show this verbatim when present and fall back to a
    /// generic message otherwise.
    pub fn backend_detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { source } => write!(f, "Request failed: {source}"),
            Self::Status {
                status,
                detail: Some(detail),
            } => write!(f, "Backend returned {status}: {detail}"),
            Self::Status {
                status,
                detail: None,
            } => write!(f, "Backend returned {status}"),
            Self::Decode { endpoint, source } => {
                write!(f, "Unexpected response from {endpoint}: {source}")
            }
            Self::Io { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "'{}' is {size} bytes, exceeds upload maximum of {max_size} bytes",
                path.display()
            ),
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http { source } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
        }
    }
}
