use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The logged-in researcher.
///
/// Produced by `bnx-auth` on login and dropped on logout. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Session {
    /// Email exactly as typed at login; not validated.
    pub email: String,
    /// Name derived from the email's local part (`jane.doe` → `Jane Doe`).
    pub display_name: String,
    pub role: String,
}
