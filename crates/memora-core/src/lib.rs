//! Core types for Memora: the exercise catalog, user statistics, and the
//! progression model that turns a finished game's score into updated stats.
//!
//! This crate has no notion of time or input. Game state machines live in
//! `memora-games`; they report a score in `0..=100` and the caller feeds it
//! through [`progression::apply_score`].

/// Error types used throughout the crate.
pub mod error;
/// The fixed catalog of training exercises.
pub mod exercise;
/// Pure score-to-stats progression arithmetic.
pub mod progression;
/// Aggregate user statistics.
pub mod stats;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export exercise catalog types.
pub use exercise::{Exercise, ExerciseId, MemoryCategory};
/// Re-export progression helpers.
pub use progression::{LevelProgress, apply_score};
/// Re-export statistics types.
pub use stats::{MemoryProfile, UserStats};
