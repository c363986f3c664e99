//! N-back: a sequence of visual cues is shown one at a time on a fixed
//! cadence, and the player declares a match whenever the current cue equals
//! the one shown `n` positions earlier.
//!
//! Time only advances through [`NBackGame::poll`] (or [`NBackGame::fire`]
//! for an external scheduler). Each step schedules the next deadline from
//! the one that just expired, so a clock that jumps several intervals at
//! once replays every step in order.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::config::NBackConfig;
use crate::cues::CueSource;
use crate::error::{GameError, GameResult};
use crate::timer::{OneShotTimer, TimerId};

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NBackState {
    /// Waiting for the player to start.
    NotStarted,
    /// Cues are being shown.
    Presenting,
    /// The last cue expired and the score has been reported.
    Finished,
    /// Abandoned without a score.
    Cancelled,
}

impl fmt::Display for NBackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not started"),
            Self::Presenting => write!(f, "presenting"),
            Self::Finished => write!(f, "finished"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// The n-back state machine.
pub struct NBackGame {
    config: NBackConfig,
    cues: Box<dyn CueSource>,
    clock: Arc<dyn Clock>,
    timer: OneShotTimer,
    state: NBackState,
    sequence: Vec<u8>,
    current: Option<usize>,
    score: u32,
    attempts: u32,
    final_score: Option<u32>,
}

impl fmt::Debug for NBackGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NBackGame")
            .field("state", &self.state)
            .field("current", &self.current)
            .field("score", &self.score)
            .field("attempts", &self.attempts)
            .finish()
    }
}

impl NBackGame {
    /// Create a game. The configuration is validated here.
    pub fn new(
        config: NBackConfig,
        cues: Box<dyn CueSource>,
        clock: Arc<dyn Clock>,
    ) -> GameResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cues,
            clock,
            timer: OneShotTimer::new(),
            state: NBackState::NotStarted,
            sequence: Vec::new(),
            current: None,
            score: 0,
            attempts: 0,
            final_score: None,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> NBackState {
        self.state
    }

    /// Whether cues are being presented.
    pub fn is_playing(&self) -> bool {
        self.state == NBackState::Presenting
    }

    /// The generated sequence (empty before start).
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Index of the cue on screen; `None` before start.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Category of the cue on screen while presenting.
    pub fn current_cue(&self) -> Option<u8> {
        match self.state {
            NBackState::Presenting => self.current.and_then(|i| self.sequence.get(i).copied()),
            _ => None,
        }
    }

    /// Correct match declarations.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// All match declarations.
    pub fn total_attempts(&self) -> u32 {
        self.attempts
    }

    /// The reported score, once finished.
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    /// The configuration in use.
    pub fn config(&self) -> &NBackConfig {
        &self.config
    }

    /// When the cue on screen expires.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timer.deadline()
    }

    /// The pending timer, for drivers that deliver expiries via [`fire`](Self::fire).
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.timer.current()
    }

    /// Generate the sequence and show the first cue.
    pub fn start(&mut self) -> GameResult<()> {
        if self.state != NBackState::NotStarted {
            return Err(self.reject("start"));
        }
        self.begin_run();
        Ok(())
    }

    /// Throw away the run in progress and start over with a new sequence.
    ///
    /// The pending deadline of the abandoned run is cancelled and can never
    /// fire into the new one.
    pub fn restart(&mut self) -> GameResult<()> {
        if self.state != NBackState::Presenting {
            return Err(self.reject("restart"));
        }
        self.begin_run();
        Ok(())
    }

    fn begin_run(&mut self) {
        self.timer.cancel();
        let categories = self.config.categories;
        self.sequence = (0..self.config.length)
            .map(|_| self.cues.next_cue(categories))
            .collect();
        self.current = Some(0);
        self.score = 0;
        self.attempts = 0;
        self.state = NBackState::Presenting;
        let deadline = self.clock.now() + self.config.interval();
        self.timer.schedule(deadline);
        debug!(
            length = self.sequence.len(),
            n = self.config.n,
            "n-back run started"
        );
    }

    /// Declare that the cue on screen matches the one `n` positions back.
    ///
    /// Every declaration counts as an attempt, including ones made before
    /// `n` cues have been shown. Returns whether it was a correct match.
    pub fn handle_match(&mut self) -> GameResult<bool> {
        let index = match (self.state, self.current) {
            (NBackState::Presenting, Some(index)) => index,
            _ => return Err(self.reject("declare a match")),
        };
        self.attempts += 1;
        let n = self.config.n;
        let hit = index >= n && self.sequence[index] == self.sequence[index - n];
        if hit {
            self.score += 1;
        }
        debug!(index, hit, score = self.score, attempts = self.attempts, "match declared");
        Ok(hit)
    }

    /// Process every deadline that has expired by the clock's current time.
    ///
    /// Returns the final score if the last cue expired.
    pub fn poll(&mut self) -> Option<u32> {
        let now = self.clock.now();
        while let Some((_, deadline)) = self.timer.take_expired(now) {
            if let Some(score) = self.step(deadline) {
                return Some(score);
            }
        }
        None
    }

    /// Deliver an expiry from an external scheduler.
    ///
    /// A stale id (cancelled, superseded, or already fired) is ignored.
    pub fn fire(&mut self, id: TimerId) -> Option<u32> {
        match self.timer.fire(id) {
            Some(deadline) => self.step(deadline),
            None => {
                debug!(%id, "stale timer ignored");
                None
            }
        }
    }

    fn step(&mut self, deadline: Duration) -> Option<u32> {
        let index = self.current?;
        if index + 1 >= self.sequence.len() {
            self.timer.cancel();
            let score = self.completion_score();
            self.state = NBackState::Finished;
            self.final_score = Some(score);
            info!(
                score,
                correct = self.score,
                attempts = self.attempts,
                "n-back finished"
            );
            Some(score)
        } else {
            self.current = Some(index + 1);
            self.timer.schedule(deadline + self.config.interval());
            None
        }
    }

    /// `round(score / max(1, attempts) * 100)`.
    fn completion_score(&self) -> u32 {
        let attempts = self.attempts.max(1);
        (f64::from(self.score) / f64::from(attempts) * 100.0).round() as u32
    }

    /// Abandon the game without reporting a score.
    pub fn cancel(&mut self) -> GameResult<()> {
        match self.state {
            NBackState::NotStarted | NBackState::Presenting => {
                self.timer.cancel();
                self.state = NBackState::Cancelled;
                info!(index = ?self.current, "n-back cancelled");
                Ok(())
            }
            _ => Err(self.reject("cancel")),
        }
    }

    fn reject(&self, action: &'static str) -> GameError {
        warn!(action, state = %self.state, "n-back call rejected");
        GameError::InvalidState {
            game: "n-back",
            action,
            state: self.state.to_string(),
        }
    }
}
