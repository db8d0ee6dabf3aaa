use thiserror::Error;

/// Failure surfaced by a host collaborator (sheet source, selection
/// dialog, or mutation sink).
#[derive(Debug, Error)]
pub enum HostError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

impl HostError {
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }
}

/// How a renumber operation can end without renumbering anything.
///
/// `Cancelled` is informational, not a fault. A `Host` error means the
/// engine has already asked the mutation sink to roll back; no partial
/// renumbering is left visible.
#[derive(Debug, Error)]
pub enum RenumberError {
    #[error("project has no sheets")]
    EmptyProject,
    #[error("operation cancelled by user")]
    Cancelled,
    #[error("host operation failed: {0}")]
    Host(#[from] HostError),
}

pub type Result<T> = std::result::Result<T, RenumberError>;
