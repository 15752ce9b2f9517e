// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Device-bound temporary token lifecycle.
//!
//! Before a device holds a durable session credential it authenticates
//! with a short-lived token bound to its device id. This service owns
//! that lifecycle: issue, exchange, and lazy expiry purge. At most one
//! live token exists per device.

use crate::db::Store;
use crate::error::AppError;
use crate::models::TempToken;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use ring::rand::{SecureRandom, SystemRandom};
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;

/// Entropy of the opaque token string, before base64 encoding.
const TOKEN_BYTES: usize = 16;

/// Per-device mutexes serializing issue() so delete+insert is atomic.
type IssueLocks = Arc<DashMap<String, Arc<Mutex<()>>>>;

/// Injectable now-source so token expiry is deterministic in tests.
#[derive(Clone)]
pub struct Clock {
    source: Arc<ClockSource>,
}

enum ClockSource {
    System,
    Manual(RwLock<DateTime<Utc>>),
}

impl Clock {
    /// Wall-clock time. Used outside of tests.
    pub fn system() -> Self {
        Self {
            source: Arc::new(ClockSource::System),
        }
    }

    /// A clock frozen at `start`, moved only by [`Clock::advance`].
    pub fn manual(start: DateTime<Utc>) -> Self {
        Self {
            source: Arc::new(ClockSource::Manual(RwLock::new(start))),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        match &*self.source {
            ClockSource::System => Utc::now(),
            ClockSource::Manual(t) => *t.read().expect("clock lock poisoned"),
        }
    }

    /// Move a manual clock forward. Panics on a system clock: tests are
    /// the only caller and must build the service with `Clock::manual`.
    pub fn advance(&self, delta: Duration) {
        match &*self.source {
            ClockSource::System => panic!("advance requires a manual clock"),
            ClockSource::Manual(t) => {
                let mut now = t.write().expect("clock lock poisoned");
                *now += delta;
            }
        }
    }
}

/// Service owning issue/exchange of temporary tokens.
#[derive(Clone)]
pub struct TokenService {
    db: Store,
    clock: Clock,
    ttl: Duration,
    rng: SystemRandom,
    issue_locks: IssueLocks,
}

impl TokenService {
    pub fn new(db: Store, clock: Clock, ttl_minutes: i64) -> Self {
        Self {
            db,
            clock,
            ttl: Duration::minutes(ttl_minutes),
            rng: SystemRandom::new(),
            issue_locks: Arc::new(DashMap::new()),
        }
    }

    /// Lifetime of an issued token.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a fresh temporary token for a device.
    ///
    /// Purges expired tokens, clears any user binding the device still
    /// holds from a previous pairing, and replaces the device's existing
    /// token. Afterwards exactly one live token exists for the device.
    /// Concurrent issues for the same device are serialized so the
    /// replace cannot leave zero or two live rows.
    pub async fn issue(&self, device_id: &str) -> Result<TempToken, AppError> {
        let lock = self
            .issue_locks
            .entry(device_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        self.purge_expired();

        if let Some(user) = self.db.find_user_by_device(device_id) {
            tracing::debug!(
                device_id,
                email = %user.email,
                "Clearing stale device binding before re-issue"
            );
            self.db.clear_device_binding(&user.email);
        }

        self.db.delete_temp_token_for_device(device_id);

        let token = TempToken {
            token: self.generate_token()?,
            device_id: device_id.to_string(),
            issued_at: self.clock.now(),
        };
        self.db.put_temp_token(&token);

        tracing::info!(device_id, "Issued temporary token");
        Ok(token)
    }

    /// Resolve a presented token to its owning device id.
    ///
    /// Fails with `NotFound` when no live row matches: the token was
    /// never issued, already replaced, or aged out. The lookup itself
    /// never deletes the row.
    pub fn exchange(&self, token: &str) -> Result<String, AppError> {
        self.purge_expired();

        self.db
            .get_temp_token(token)
            .map(|t| t.device_id)
            .ok_or_else(|| AppError::NotFound("Temporary token not found".to_string()))
    }

    /// Lazy expiry sweep, run at the head of every issue and exchange.
    fn purge_expired(&self) {
        let cutoff = self.clock.now() - self.ttl;
        let removed = self.db.purge_expired_temp_tokens(cutoff);
        if removed > 0 {
            tracing::debug!(removed, "Purged expired temporary tokens");
        }
    }

    fn generate_token(&self) -> Result<String, AppError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("system RNG failure")))?;
        Ok(URL_SAFE_NO_PAD.encode(bytes))
    }
}
