//! User and temporary-token models for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile. The email is the identity key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Email address (also used as document ID)
    pub email: String,
    /// Device currently paired with this account, if any.
    /// Mutated only through the store's binding operations.
    pub device_id: Option<String>,
    /// When the user registered (RFC 3339)
    pub created_at: String,
}

/// Short-lived, device-bound credential used once to establish a session.
///
/// At most one live token exists per device; re-issuing replaces the
/// previous one, and the purge drops anything older than the TTL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TempToken {
    /// Opaque token string handed to the device
    pub token: String,
    /// Device the token was issued to
    pub device_id: String,
    /// Issue time, compared against the TTL on every purge
    pub issued_at: DateTime<Utc>,
}
