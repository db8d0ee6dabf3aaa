//! Request and outcome types handed across the engine seam.

use serde::{Deserialize, Serialize};

/// What the user chose in the selection dialog: a depth-1 subgroup key
/// and the starting-number text, both immutable for one operation.
///
/// `start` stays a string here; the engine parses it and falls back to
/// `1` when it is not a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenumberRequest {
    pub subgroup: String,
    pub start: String,
}

/// Result of the selection step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(RenumberRequest),
    Cancelled,
}

/// What a completed operation reports back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenumberOutcome {
    /// Number of sheets that received a new sequential identifier.
    pub renumbered: usize,
}
