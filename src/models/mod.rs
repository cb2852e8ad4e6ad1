// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod user;

pub use activity::{Accomplishment, DailyActivity, StoredDailyActivity};
pub use user::User;
