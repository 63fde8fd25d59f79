use std::fmt;

/// Everything that can stop the dashboard from coming up.
///
/// All variants are fatal: startup aborts and no page is served.
#[derive(Debug)]
pub enum DashboardError {
    /// The sales file does not exist
    FileNotFound(String),

    /// IO error while reading the file or binding the listener
    Io(std::io::Error),

    /// CSV framing error (bad quoting, uneven record, invalid UTF-8)
    Csv(csv::Error),

    /// A row whose values cannot be turned into a sales record
    Parse { line: u64, message: String },

    /// Required columns absent from the header
    Schema { missing: Vec<String> },

    /// A chart figure could not be serialized
    Serialization(serde_json::Error),

    /// The HTTP server stopped with an error
    Server(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::FileNotFound(path) => write!(f, "File not found: {path}"),
            DashboardError::Io(err) => write!(f, "IO error: {err}"),
            DashboardError::Csv(err) => write!(f, "CSV error: {err}"),
            DashboardError::Parse { line, message } => {
                write!(f, "Parse error on line {line}: {message}")
            }
            DashboardError::Schema { missing } => {
                write!(f, "Schema error: missing column(s) {}", missing.join(", "))
            }
            DashboardError::Serialization(err) => write!(f, "Serialization error: {err}"),
            DashboardError::Server(msg) => write!(f, "Server error: {msg}"),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::Io(err) => Some(err),
            DashboardError::Csv(err) => Some(err),
            DashboardError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Io(err)
    }
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        DashboardError::Csv(err)
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err)
    }
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
