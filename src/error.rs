use thiserror::Error;
use tracing::{error, warn};

/// Error severity for host display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,    // informational, nothing to show
    Warning, // recoverable, defaults were used
    Error,   // operation failed
}

/// Domain-specific errors for scene search and export
#[derive(Error, Debug)]
pub enum SceneSearchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Outline loading failed for '{path}': {source}")]
    OutlineLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    OutlineParse(#[from] serde_json::Error),

    #[error("Export to '{format}' failed: {message}")]
    Export { format: String, message: String },

    #[error("Invalid command: {0}")]
    CommandParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Severity and message are for hosts that surface errors to the user.
impl SceneSearchError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(_) => ErrorSeverity::Warning,
            Self::OutlineLoad { .. } => ErrorSeverity::Error,
            Self::OutlineParse(_) => ErrorSeverity::Error,
            Self::Export { .. } => ErrorSeverity::Error,
            Self::CommandParse(_) => ErrorSeverity::Info,
            Self::Io(_) => ErrorSeverity::Error,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Config(msg) => format!("Configuration issue: {}", msg),
            Self::OutlineLoad { path, .. } => format!("Could not read outline from {}", path),
            Self::OutlineParse(e) => format!("Invalid outline format: {}", e),
            Self::Export { format, .. } => format!("Could not export the document as {}", format),
            Self::CommandParse(msg) => msg.clone(),
            Self::Io(e) => format!("Could not read or write: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, SceneSearchError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use scene_heading_search::error::ResultExt;
///
/// let outline = load_outline(&path).log_err().unwrap_or_default();
/// let config = load_config_from(&path).warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
