// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod feeds;
pub mod session;
pub mod sync;
pub mod token;

pub use feeds::FeedService;
pub use session::SessionService;
pub use sync::SyncService;
pub use token::{Clock, TokenService};
