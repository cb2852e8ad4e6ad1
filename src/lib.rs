// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Uplift backend: API server and maintenance tools for the Uplift habit app
//!
//! This crate provides the backend endpoints that generate affirmations and
//! encouragements via the Gemini API, plus the Firestore maintenance scripts
//! (schema migration and accomplishment reporting).

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::GeminiClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub gemini: GeminiClient,
}
