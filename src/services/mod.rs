// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod gemini;
pub mod maintenance;
pub mod prompts;

pub use gemini::{GeminiClient, GenerationError, GENERATION_MODEL};
pub use maintenance::MigrationSummary;
