use serde::{Deserialize, Serialize};

/// Display profile of a streamer, as persisted in the registry.
///
/// Field order matches the on-disk layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamerProfile {
    /// User-editable display name.
    pub name: String,
    /// Primary key, immutable once registered.
    pub uid: String,
    /// Chart color as `#RRGGBB`.
    pub color: String,
    /// `YYYY-MM-DD HH:MM:SS`, set once at registration.
    pub created_at: String,
}
