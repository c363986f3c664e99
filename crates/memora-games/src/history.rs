use std::fmt;

use memora_core::ExerciseId;
use serde::Serialize;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SessionOutcome {
    /// The game reported a score, which was applied to the stats.
    Completed {
        /// The reported score.
        score: u32,
        /// Total XP after applying the score.
        xp: u64,
        /// Level after applying the score.
        level: u32,
    },
    /// The player abandoned the game.
    Cancelled,
}

impl fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed { score, xp, level } => {
                write!(f, "scored {score} ({xp} XP, level {level})")
            }
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A record of one game in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    /// 1-based position of this game in the session.
    pub ordinal: u64,
    /// The exercise that was played.
    pub exercise: ExerciseId,
    /// How it ended.
    #[serde(flatten)]
    pub outcome: SessionOutcome,
}

/// Accumulates records of finished and cancelled games.
#[derive(Debug, Default)]
pub struct SessionHistory {
    records: Vec<SessionRecord>,
    max_records: usize,
    next_ordinal: u64,
}

impl SessionHistory {
    /// Create a history with the given maximum capacity (0 = unlimited).
    pub fn new(max_records: usize) -> Self {
        Self {
            records: Vec::new(),
            max_records,
            next_ordinal: 0,
        }
    }

    /// Record a game, dropping the oldest records if over capacity.
    pub fn push(&mut self, exercise: ExerciseId, outcome: SessionOutcome) -> &SessionRecord {
        self.next_ordinal += 1;
        self.records.push(SessionRecord {
            ordinal: self.next_ordinal,
            exercise,
            outcome,
        });
        if self.max_records > 0 && self.records.len() > self.max_records {
            let drain_count = self.records.len() - self.max_records;
            self.records.drain(..drain_count);
        }
        &self.records[self.records.len() - 1]
    }

    /// All retained records, oldest first.
    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Scores of completed games, oldest first.
    pub fn scores(&self) -> impl Iterator<Item = u32> + '_ {
        self.records.iter().filter_map(|r| match r.outcome {
            SessionOutcome::Completed { score, .. } => Some(score),
            SessionOutcome::Cancelled => None,
        })
    }

    /// Mean score of completed games.
    pub fn average_score(&self) -> Option<f64> {
        let (sum, count) = self
            .scores()
            .fold((0u64, 0u32), |(s, c), score| (s + u64::from(score), c + 1));
        (count > 0).then(|| sum as f64 / f64::from(count))
    }
}
