//! Aggregate user statistics.
//!
//! [`UserStats`] lives for the length of a training session and is only ever
//! replaced wholesale by [`crate::progression::apply_score`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::progression::level_for_xp;

/// Per-user memory performance profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryProfile {
    /// Smoothed recall accuracy in `[0, 1]`.
    pub accuracy: f64,
    /// Average response latency in milliseconds.
    pub latency_ms: u32,
    /// Estimated long-term retention rate in `[0, 1]`.
    pub retention_rate: f64,
}

impl Default for MemoryProfile {
    fn default() -> Self {
        Self {
            accuracy: 0.85,
            latency_ms: 1200,
            retention_rate: 0.72,
        }
    }
}

/// Aggregate training statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// Cumulative experience points.
    pub xp: u64,
    /// Consecutive training days.
    pub streak: u32,
    /// Current level, always `xp / 500 + 1`.
    pub level: u32,
    /// Number of completed games.
    pub total_sessions: u32,
    /// When the user last trained.
    pub last_trained: DateTime<Utc>,
    /// Memory performance profile.
    pub memory_profile: MemoryProfile,
}

impl Default for UserStats {
    fn default() -> Self {
        Self::initial()
    }
}

impl UserStats {
    /// Statistics of a brand-new user, last trained now.
    pub fn initial() -> Self {
        Self::initial_at(Utc::now())
    }

    /// Statistics of a brand-new user with an explicit timestamp.
    pub fn initial_at(last_trained: DateTime<Utc>) -> Self {
        Self {
            xp: 0,
            streak: 0,
            level: 1,
            total_sessions: 0,
            last_trained,
            memory_profile: MemoryProfile::default(),
        }
    }

    /// Set the experience points, recomputing the level.
    pub fn with_xp(mut self, xp: u64) -> Self {
        self.xp = xp;
        self.level = level_for_xp(xp);
        self
    }

    /// Set the smoothed accuracy.
    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.memory_profile.accuracy = accuracy;
        self
    }

    /// Set the completed session count.
    pub fn with_sessions(mut self, sessions: u32) -> Self {
        self.total_sessions = sessions;
        self
    }

    /// Check the invariants a hand-built value must satisfy.
    pub fn validate(&self) -> CoreResult<()> {
        let accuracy = self.memory_profile.accuracy;
        if !(0.0..=1.0).contains(&accuracy) {
            return Err(CoreError::InvalidStats(format!(
                "accuracy {accuracy} is outside [0, 1]"
            )));
        }
        let expected = level_for_xp(self.xp);
        if self.level != expected {
            return Err(CoreError::InvalidStats(format!(
                "level {} does not match {} xp (expected {expected})",
                self.level, self.xp
            )));
        }
        Ok(())
    }
}
