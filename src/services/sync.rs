// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sync exchange orchestration.
//!
//! One exchange is: merge what the device submitted into the caller's
//! experiences (push), then assemble a fresh outbound snapshot (pull).
//! The merge is append-only; a retried request will create duplicate
//! records rather than silently de-duplicating.

use crate::db::ScopedStore;
use crate::error::AppError;
use crate::models::{SyncInputData, SyncOutputData};
use crate::services::FeedService;

/// Service performing sync exchanges over a user-scoped view.
#[derive(Clone)]
pub struct SyncService {
    feeds: FeedService,
}

impl SyncService {
    pub fn new(feeds: FeedService) -> Self {
        Self { feeds }
    }

    /// Assemble the outbound snapshot: every experience owned by the
    /// bound user, plus the full weather and emergency-contact feeds.
    /// Read-only over the scoped view.
    pub fn pull(&self, scoped: &ScopedStore) -> SyncOutputData {
        let experiences = scoped.experiences();

        tracing::debug!(
            owner = scoped.owner(),
            experiences = experiences.len(),
            "Assembled sync snapshot"
        );

        SyncOutputData {
            experiences,
            weather: self.feeds.weather().to_vec(),
            emergency_contacts: self.feeds.emergency_contacts().to_vec(),
        }
    }

    /// Merge device-submitted data into the experiences it references.
    ///
    /// Each input resolves its experience through the scoped view, so a
    /// forged or foreign id fails with `NotFound` before anything is
    /// written. Submitted telemetry is appended to the referenced track
    /// and submitted user points to the experience's point set.
    pub fn push(&self, scoped: &ScopedStore, inputs: &[SyncInputData]) -> Result<(), AppError> {
        for input in inputs {
            let mut experience = scoped.get_experience(&input.experience_id)?;

            for upload in &input.telemetries {
                let track = experience
                    .tracks
                    .iter_mut()
                    .find(|t| t.id == upload.track_id)
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Track {} not found", upload.track_id))
                    })?;
                track.telemetries.push(upload.telemetry.clone());
            }

            experience
                .user_points
                .extend(input.user_points.iter().cloned());

            scoped.put_experience(experience)?;

            tracing::debug!(
                owner = scoped.owner(),
                experience_id = %input.experience_id,
                user_points = input.user_points.len(),
                telemetries = input.telemetries.len(),
                "Merged sync input"
            );
        }

        Ok(())
    }
}
