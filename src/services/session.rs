// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session resolution: stateless JWT session tokens and the mandatory
//! resolve/scope gate in front of all business data.
//!
//! A session token embeds the user's email in its `sub` claim, so
//! validity is a pure local decode plus "does the embedded user still
//! exist". Nothing about the session is stored server-side.

use crate::db::{ScopedStore, Store};
use crate::error::AppError;
use crate::models::User;
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Session lifetime: 30 days.
const SESSION_LIFETIME_SECS: usize = 30 * 24 * 60 * 60;

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

/// Service turning presented session credentials into identified users
/// and user-scoped data views.
#[derive(Clone)]
pub struct SessionService {
    db: Store,
    signing_key: Vec<u8>,
}

impl SessionService {
    pub fn new(db: Store, signing_key: Vec<u8>) -> Self {
        Self { db, signing_key }
    }

    /// Create a session JWT for a user.
    pub fn create_session_token(&self, email: &str) -> Result<String, AppError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("System time error: {}", e)))?
            .as_secs() as usize;

        let claims = Claims {
            sub: email.to_string(),
            iat: now,
            exp: now + SESSION_LIFETIME_SECS,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.signing_key),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))
    }

    /// Resolve a presented session token to its user.
    ///
    /// The decode is purely local; the only storage round trip is the
    /// user lookup. A malformed or expired token and an unknown user
    /// both fail with `Unauthorized`.
    pub fn resolve(&self, session_token: &str) -> Result<User, AppError> {
        let key = DecodingKey::from_secret(&self.signing_key);
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(session_token, &key, &validation)
            .map_err(|_| AppError::Unauthorized)?;

        self.db
            .get_user(&token_data.claims.sub)
            .ok_or(AppError::Unauthorized)
    }

    /// Return a data-access facade bound to `user`. Cannot fail for a
    /// resolved user.
    pub fn scope(&self, user: &User) -> ScopedStore {
        self.db.for_user(user)
    }
}
