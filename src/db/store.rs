// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Concurrent in-memory store with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profile storage, device bindings)
//! - Temporary tokens (device handshake credentials)
//! - Experiences (owned business data, accessed via [`ScopedStore`])
//!
//! Experiences are only reachable through [`Store::for_user`]; the raw
//! map carries the owner alongside each record so the scoped facade can
//! filter without a join.

use crate::db::scoped::ScopedStore;
use crate::models::{TempToken, User};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;

use crate::models::Experience;

/// An experience row together with the email of the user owning it.
#[derive(Debug, Clone)]
pub(crate) struct OwnedExperience {
    pub(crate) owner: String,
    pub(crate) experience: Experience,
}

/// Shared in-memory database handle. Cloning is cheap and clones see
/// the same data.
#[derive(Clone, Default)]
pub struct Store {
    users: Arc<DashMap<String, User>>,
    temp_tokens: Arc<DashMap<String, TempToken>>,
    pub(crate) experiences: Arc<DashMap<String, OwnedExperience>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by email.
    pub fn get_user(&self, email: &str) -> Option<User> {
        self.users.get(email).map(|u| u.clone())
    }

    /// Create or update a user.
    pub fn upsert_user(&self, user: &User) {
        self.users.insert(user.email.clone(), user.clone());
    }

    /// Find the user currently bound to a device, if any.
    pub fn find_user_by_device(&self, device_id: &str) -> Option<User> {
        self.users
            .iter()
            .find(|u| u.device_id.as_deref() == Some(device_id))
            .map(|u| u.clone())
    }

    /// Bind a device to a user, stealing the binding from any other
    /// user currently holding it. A device is bound to at most one user.
    pub fn bind_device(&self, email: &str, device_id: &str) {
        let holders: Vec<String> = self
            .users
            .iter()
            .filter(|u| u.device_id.as_deref() == Some(device_id) && u.email != email)
            .map(|u| u.email.clone())
            .collect();

        for holder in holders {
            self.clear_device_binding(&holder);
        }

        if let Some(mut user) = self.users.get_mut(email) {
            user.device_id = Some(device_id.to_string());
        }
    }

    /// Clear a user's device binding.
    pub fn clear_device_binding(&self, email: &str) {
        if let Some(mut user) = self.users.get_mut(email) {
            user.device_id = None;
        }
    }

    // ─── Temporary Token Operations ──────────────────────────────

    /// Store a temporary token, keyed by the opaque token string.
    pub fn put_temp_token(&self, token: &TempToken) {
        self.temp_tokens.insert(token.token.clone(), token.clone());
    }

    /// Look up a temporary token. The lookup never deletes the row;
    /// stale rows die via the purge or via re-issue for the device.
    pub fn get_temp_token(&self, token: &str) -> Option<TempToken> {
        self.temp_tokens.get(token).map(|t| t.clone())
    }

    /// Delete the temporary token bound to a device, if one exists.
    pub fn delete_temp_token_for_device(&self, device_id: &str) {
        self.temp_tokens.retain(|_, t| t.device_id != device_id);
    }

    /// Delete every temporary token issued at or before `cutoff`.
    /// Returns the number of rows removed.
    pub fn purge_expired_temp_tokens(&self, cutoff: DateTime<Utc>) -> usize {
        let before = self.temp_tokens.len();
        self.temp_tokens.retain(|_, t| t.issued_at > cutoff);
        before.saturating_sub(self.temp_tokens.len())
    }

    // ─── Scoped Access ───────────────────────────────────────────

    /// Return a data-access facade bound to `user`. Every experience
    /// operation on the returned value is filtered to that user.
    pub fn for_user(&self, user: &User) -> ScopedStore {
        ScopedStore::new(user.email.clone(), self.clone())
    }
}
