use std::fmt;

/// Result type for dbug-dock operations
pub type Result<T> = std::result::Result<T, Error>;

/// Persisted-state failures. The widget logs and swallows these.
#[derive(Debug)]
pub enum Error {
    /// Storage is switched off or otherwise refusing access
    Unavailable(String),

    /// IO operation failed
    Io(std::io::Error),

    /// Stored data could not be decoded
    Corrupt(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Corrupt(err) => write!(f, "Corrupt storage: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Unavailable(_) => None,
            Error::Io(err) => Some(err),
            Error::Corrupt(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Corrupt(err)
    }
}
