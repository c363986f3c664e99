//! Progression model: how a finished game's score moves the user forward.
//!
//! Every function here is pure. A score is the integer a game reports on
//! completion, nominally in `0..=100`; anything larger is clamped.

use serde::Serialize;

use crate::stats::UserStats;

/// Experience points needed per level.
pub const XP_PER_LEVEL: u64 = 500;

/// Highest score a game can report.
pub const MAX_SCORE: u32 = 100;

/// Weight of the newest sample in the accuracy moving average.
pub const ACCURACY_SAMPLE_WEIGHT: f64 = 0.1;

/// Weight of the accumulated history in the accuracy moving average.
pub const ACCURACY_HISTORY_WEIGHT: f64 = 0.9;

/// Level reached with the given experience points.
pub fn level_for_xp(xp: u64) -> u32 {
    u32::try_from(xp / XP_PER_LEVEL)
        .unwrap_or(u32::MAX - 1)
        .saturating_add(1)
}

/// Apply one completed game's score to the aggregate statistics.
///
/// `xp` grows by the score, the session count by one, the level is derived
/// from the new `xp`, and accuracy is smoothed with weight 0.1 on the new
/// sample. All other fields carry over unchanged.
pub fn apply_score(stats: &UserStats, score: u32) -> UserStats {
    let score = score.min(MAX_SCORE);
    let xp = stats.xp.saturating_add(u64::from(score));
    let sample = f64::from(score) / f64::from(MAX_SCORE);

    let mut next = stats.clone();
    next.xp = xp;
    next.total_sessions = stats.total_sessions.saturating_add(1);
    next.level = level_for_xp(xp);
    next.memory_profile.accuracy = stats.memory_profile.accuracy
        * ACCURACY_HISTORY_WEIGHT
        + sample * ACCURACY_SAMPLE_WEIGHT;
    next
}

/// How far the user is into the current level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelProgress {
    /// The current level.
    pub level: u32,
    /// Experience earned since the current level began.
    pub xp_into_level: u64,
    /// Experience needed for a full level.
    pub xp_per_level: u64,
    /// Progress toward the next level, `0.0..=100.0`.
    pub percent: f64,
}

impl LevelProgress {
    /// Compute progress for the given statistics.
    pub fn of(stats: &UserStats) -> Self {
        let xp_into_level = stats.xp % XP_PER_LEVEL;
        Self {
            level: level_for_xp(stats.xp),
            xp_into_level,
            xp_per_level: XP_PER_LEVEL,
            percent: (xp_into_level as f64 / 5.0).min(100.0),
        }
    }

    /// The level being worked toward.
    pub fn next_level(&self) -> u32 {
        self.level.saturating_add(1)
    }
}

impl std::fmt::Display for LevelProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} / {} XP to Level {}",
            self.xp_into_level,
            self.xp_per_level,
            self.next_level()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn crossing_a_level_boundary() {
        let stats = UserStats::initial().with_xp(480);
        let next = apply_score(&stats, 50);
        assert_eq!(next.xp, 530);
        assert_eq!(next.level, 2);
        assert_eq!(next.total_sessions, 1);
    }

    #[test]
    fn accuracy_is_smoothed() {
        let stats = UserStats::initial().with_accuracy(0.5);
        let next = apply_score(&stats, 100);
        assert!((next.memory_profile.accuracy - 0.55).abs() < 1e-12);

        let next = apply_score(&stats, 0);
        assert!((next.memory_profile.accuracy - 0.45).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_score_is_clamped() {
        let stats = UserStats::initial();
        let next = apply_score(&stats, 250);
        assert_eq!(next.xp, 100);
        assert!(next.memory_profile.accuracy <= 1.0);
    }

    #[test]
    fn xp_saturates_at_the_top() {
        let stats = UserStats::initial().with_xp(u64::MAX - 10);
        let next = apply_score(&stats, 50);
        assert_eq!(next.xp, u64::MAX);
        assert_eq!(next.level, level_for_xp(u64::MAX));
        assert!(next.validate().is_ok());
    }

    #[test]
    fn carried_fields_untouched() {
        let mut stats = UserStats::initial();
        stats.streak = 7;
        stats.memory_profile.latency_ms = 900;
        let next = apply_score(&stats, 40);
        assert_eq!(next.streak, 7);
        assert_eq!(next.memory_profile.latency_ms, 900);
        assert_eq!(next.last_trained, stats.last_trained);
        assert_eq!(next.memory_profile.retention_rate, stats.memory_profile.retention_rate);
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(499), 1);
        assert_eq!(level_for_xp(500), 2);
        assert_eq!(level_for_xp(1000), 3);
    }

    #[test]
    fn level_progress_display() {
        let progress = LevelProgress::of(&UserStats::initial().with_xp(730));
        assert_eq!(progress.level, 2);
        assert_eq!(progress.xp_into_level, 230);
        assert!((progress.percent - 46.0).abs() < f64::EPSILON);
        assert_eq!(progress.to_string(), "230 / 500 XP to Level 3");
    }

    proptest! {
        #[test]
        fn update_is_exact(xp in 0u64..1_000_000, sessions in 0u32..10_000, score in 0u32..=100) {
            let stats = UserStats::initial().with_xp(xp).with_sessions(sessions);
            let next = apply_score(&stats, score);
            prop_assert_eq!(next.xp, xp + u64::from(score));
            prop_assert_eq!(next.total_sessions, sessions + 1);
            prop_assert_eq!(next.level, (next.xp / 500) as u32 + 1);
            prop_assert!(next.validate().is_ok());
        }

        #[test]
        fn accuracy_stays_in_unit_range(acc in 0.0f64..=1.0, score in 0u32..=1000) {
            let stats = UserStats::initial().with_accuracy(acc);
            let next = apply_score(&stats, score);
            prop_assert!((0.0..=1.0).contains(&next.memory_profile.accuracy));
        }

        #[test]
        fn xp_never_decreases(xp in any::<u64>(), score in any::<u32>()) {
            let stats = UserStats::initial().with_xp(xp);
            prop_assert!(apply_score(&stats, score).xp >= xp);
        }
    }
}
