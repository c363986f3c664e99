//! Paired-associates: study a list of cue→target word pairs, then recall each
//! target from its cue, in study order.
//!
//! The default pairs are fixed fixture data, identical on every run, so
//! scores from different sessions are directly comparable.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{GameError, GameResult};

/// A cue word and the target word paired with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    /// Shown during the test.
    pub cue: String,
    /// Expected recall answer.
    pub target: String,
}

impl WordPair {
    /// Create a pair.
    pub fn new(cue: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            cue: cue.into(),
            target: target.into(),
        }
    }
}

/// The built-in study list.
pub fn default_pairs() -> Vec<WordPair> {
    vec![
        WordPair::new("Dog", "Cloud"),
        WordPair::new("Phone", "Water"),
        WordPair::new("Table", "Forest"),
        WordPair::new("Star", "Sandwich"),
    ]
}

/// Whether a typed answer recalls the target: case-insensitive, ignoring
/// surrounding whitespace.
pub fn answer_matches(answer: &str, target: &str) -> bool {
    answer.trim().to_lowercase() == target.trim().to_lowercase()
}

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairedPhase {
    /// All pairs visible for memorization.
    Study,
    /// Recalling one target at a time.
    Test,
    /// Every cue answered; the score has been reported.
    Finished,
    /// Abandoned without a score.
    Cancelled,
}

impl fmt::Display for PairedPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Study => write!(f, "studying"),
            Self::Test => write!(f, "testing"),
            Self::Finished => write!(f, "finished"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// The paired-associates state machine.
#[derive(Debug, Clone)]
pub struct PairedAssociatesGame {
    pairs: Vec<WordPair>,
    phase: PairedPhase,
    test_index: usize,
    score: u32,
    input: String,
    final_score: Option<u32>,
}

impl PairedAssociatesGame {
    /// Create a game over `pairs`. An empty list is rejected.
    pub fn new(pairs: Vec<WordPair>) -> GameResult<Self> {
        if pairs.is_empty() {
            return Err(GameError::InvalidConfig(
                "paired-associates needs at least one pair".into(),
            ));
        }
        Ok(Self {
            pairs,
            phase: PairedPhase::Study,
            test_index: 0,
            score: 0,
            input: String::new(),
            final_score: None,
        })
    }

    /// Create a game over the built-in pairs.
    pub fn with_default_pairs() -> Self {
        Self {
            pairs: default_pairs(),
            phase: PairedPhase::Study,
            test_index: 0,
            score: 0,
            input: String::new(),
            final_score: None,
        }
    }

    /// The full study list.
    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    /// Current phase.
    pub fn phase(&self) -> PairedPhase {
        self.phase
    }

    /// Index of the cue being tested.
    pub fn test_index(&self) -> usize {
        self.test_index
    }

    /// The cue currently being tested, if in the test phase.
    pub fn current_cue(&self) -> Option<&str> {
        match self.phase {
            PairedPhase::Test => self.pairs.get(self.test_index).map(|p| p.cue.as_str()),
            _ => None,
        }
    }

    /// Correct recalls so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The pending answer text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The reported score, once finished.
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    /// Leave the study phase and start testing from the first cue.
    pub fn begin_test(&mut self) -> GameResult<()> {
        if self.phase != PairedPhase::Study {
            return Err(self.reject("begin test"));
        }
        self.phase = PairedPhase::Test;
        self.test_index = 0;
        self.score = 0;
        self.input.clear();
        debug!(pairs = self.pairs.len(), "paired-associates test started");
        Ok(())
    }

    /// Replace the pending answer text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Append one typed character to the pending answer.
    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Remove the last typed character.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the pending answer text.
    pub fn submit(&mut self) -> GameResult<Option<u32>> {
        let answer = std::mem::take(&mut self.input);
        let result = self.submit_answer(&answer);
        if result.is_err() {
            self.input = answer;
        }
        result
    }

    /// Check an answer against the current cue's target.
    ///
    /// Returns the final score (`round(100 * correct / pairs)`) when the last
    /// cue was answered, otherwise moves on to the next cue.
    pub fn submit_answer(&mut self, answer: &str) -> GameResult<Option<u32>> {
        if self.phase != PairedPhase::Test {
            return Err(self.reject("submit an answer"));
        }
        let target = &self.pairs[self.test_index].target;
        let correct = answer_matches(answer, target);
        if correct {
            self.score += 1;
        }
        debug!(index = self.test_index, correct, "recall answered");

        if self.test_index + 1 == self.pairs.len() {
            let score = (f64::from(self.score) / self.pairs.len() as f64 * 100.0).round() as u32;
            self.phase = PairedPhase::Finished;
            self.final_score = Some(score);
            self.input.clear();
            info!(score, correct = self.score, "paired-associates finished");
            Ok(Some(score))
        } else {
            self.test_index += 1;
            self.input.clear();
            Ok(None)
        }
    }

    /// Abandon the game without reporting a score.
    pub fn cancel(&mut self) -> GameResult<()> {
        match self.phase {
            PairedPhase::Study | PairedPhase::Test => {
                self.phase = PairedPhase::Cancelled;
                info!("paired-associates cancelled");
                Ok(())
            }
            _ => Err(self.reject("cancel")),
        }
    }

    fn reject(&self, action: &'static str) -> GameError {
        warn!(action, phase = %self.phase, "paired-associates call rejected");
        GameError::InvalidState {
            game: "paired-associates",
            action,
            state: self.phase.to_string(),
        }
    }
}
