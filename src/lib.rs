// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trailsync: sync backend for field-recorded experiences
//!
//! This crate provides the backend API that devices use to authenticate
//! via short-lived device tokens and to synchronize recorded experiences
//! (tracks, waypoints, points of interest) per user.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::Store;
use services::{SessionService, SyncService, TokenService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Store,
    pub tokens: TokenService,
    pub sessions: SessionService,
    pub sync: SyncService,
}
