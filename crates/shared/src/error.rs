use thiserror::Error;

/// Any failure talking to the employee API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("employee API returned HTTP {status}")]
    Status { status: u16 },
    #[error("employee API unreachable: {0}")]
    Transport(String),
    #[error("employee API response could not be decoded: {0}")]
    Decode(String),
}

impl RemoteError {
    /// True when the API answered with a non-success status, as opposed to a
    /// fault below HTTP (connection, body read, JSON).
    pub fn is_http_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid api base url '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },
    #[error("could not read settings file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse settings file '{path}': {reason}")]
    Parse { path: String, reason: String },
}
