use serde::{Deserialize, Serialize};

/// A single waitlist signup.
///
/// Entries are never mutated after creation. `email` is always stored in its
/// normalized form (trimmed, lower-case).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    /// Opaque identifier assigned by the backend that created the record.
    pub id: String,

    /// Normalized email address.
    pub email: String,

    /// Creation instant in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Body returned after the waitlist has been cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearResponse {
    pub message: String,
}
