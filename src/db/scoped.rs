// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user scoped view over the store.
//!
//! A `ScopedStore` closes over one user's email and exposes only
//! ownership-filtered operations, so a handler holding it cannot reach
//! another user's data even with a forged id. Absent and foreign-owned
//! rows produce the same `NotFound` error.

use crate::db::store::{OwnedExperience, Store};
use crate::error::AppError;
use crate::models::{Experience, ExperienceRef, Telemetry, Track};
use dashmap::mapref::entry::Entry;

/// Data-access facade bound to one authenticated user.
#[derive(Clone)]
pub struct ScopedStore {
    owner: String,
    store: Store,
}

fn not_found(kind: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{kind} {id} not found"))
}

impl ScopedStore {
    pub(crate) fn new(owner: String, store: Store) -> Self {
        Self { owner, store }
    }

    /// Email of the user this view is bound to.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    // ─── Experience Operations ───────────────────────────────────

    /// List id and name of every experience owned by the bound user.
    /// Order is not guaranteed.
    pub fn list_experiences(&self) -> Vec<ExperienceRef> {
        self.store
            .experiences
            .iter()
            .filter(|e| e.owner == self.owner)
            .map(|e| ExperienceRef {
                id: e.experience.id.clone(),
                name: e.experience.name.clone(),
            })
            .collect()
    }

    /// Fetch every experience owned by the bound user, in full.
    pub fn experiences(&self) -> Vec<Experience> {
        self.store
            .experiences
            .iter()
            .filter(|e| e.owner == self.owner)
            .map(|e| e.experience.clone())
            .collect()
    }

    /// Get one experience by id. Fails identically whether the row is
    /// absent or owned by a different user.
    pub fn get_experience(&self, id: &str) -> Result<Experience, AppError> {
        self.store
            .experiences
            .get(id)
            .filter(|e| e.owner == self.owner)
            .map(|e| e.experience.clone())
            .ok_or_else(|| not_found("Experience", id))
    }

    /// Upsert an experience by id. The new value replaces the old one
    /// wholesale and ownership stays with the bound user. An id held by
    /// another user is reported as absent rather than overwritten;
    /// generated UUIDs make that collision a non-event in practice.
    pub fn put_experience(&self, experience: Experience) -> Result<(), AppError> {
        match self.store.experiences.entry(experience.id.clone()) {
            Entry::Occupied(mut entry) => {
                if entry.get().owner != self.owner {
                    return Err(not_found("Experience", &experience.id));
                }
                entry.insert(OwnedExperience {
                    owner: self.owner.clone(),
                    experience,
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(OwnedExperience {
                    owner: self.owner.clone(),
                    experience,
                });
            }
        }
        Ok(())
    }

    /// Delete an experience by id. Deleting an absent or foreign-owned
    /// id has no effect.
    pub fn delete_experience(&self, id: &str) {
        self.store
            .experiences
            .remove_if(id, |_, e| e.owner == self.owner);
    }

    // ─── Track / Telemetry Lookups ───────────────────────────────

    /// Get a track, visible only through an owned experience.
    pub fn get_track(&self, experience_id: &str, track_id: &str) -> Result<Track, AppError> {
        let experience = self.get_experience(experience_id)?;
        experience
            .tracks
            .into_iter()
            .find(|t| t.id == track_id)
            .ok_or_else(|| not_found("Track", track_id))
    }

    /// Get a telemetry record, scoped transitively through the track's
    /// experience.
    pub fn get_telemetry(
        &self,
        experience_id: &str,
        track_id: &str,
        telemetry_id: &str,
    ) -> Result<Telemetry, AppError> {
        let track = self.get_track(experience_id, track_id)?;
        track
            .telemetries
            .into_iter()
            .find(|t| t.id == telemetry_id)
            .ok_or_else(|| not_found("Telemetry", telemetry_id))
    }
}
