//! Session controller.
//!
//! `SessionController` owns the user's statistics and at most one active
//! game. Input is routed to the active game; when a game reports a score the
//! controller applies it through the progression model, records it, clears
//! the game, and navigates back to [`View::Home`]. Cancelling clears the
//! game without touching the statistics.

use std::fmt;
use std::sync::Arc;

use memora_core::progression::MAX_SCORE;
use memora_core::{ExerciseId, UserStats, apply_score};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::config::SessionConfig;
use crate::cues::{CueSource, from_entropy};
use crate::error::{GameError, GameResult};
use crate::game::{ActiveGame, Completion};
use crate::history::{SessionHistory, SessionOutcome};
use crate::nback::NBackGame;
use crate::paired::PairedAssociatesGame;

/// Top-level screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Progress summary and recommendations.
    Home,
    /// Exercise library and the active game.
    Train,
    /// Statistics overview.
    Stats,
    /// Spaced-repetition review queue (placeholder).
    Review,
}

type CueFactory = Box<dyn FnMut() -> Box<dyn CueSource>>;

/// Owns the stats and the active game for one training session.
pub struct SessionController {
    config: SessionConfig,
    clock: Arc<dyn Clock>,
    cue_factory: CueFactory,
    stats: UserStats,
    active: Option<ActiveGame>,
    view: View,
    history: SessionHistory,
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("view", &self.view)
            .field("active", &self.active.as_ref().map(ActiveGame::exercise))
            .field("xp", &self.stats.xp)
            .field("history", &self.history.len())
            .finish()
    }
}

impl SessionController {
    /// Create a controller with fresh statistics.
    ///
    /// Each n-back game draws its cues from a generator derived from the
    /// configured seed, or from the OS when no seed is set.
    pub fn new(config: SessionConfig, clock: Arc<dyn Clock>) -> GameResult<Self> {
        config.validate()?;
        let mut master = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => from_entropy(),
        };
        let cue_factory: CueFactory =
            Box::new(move || Box::new(StdRng::from_rng(&mut master)) as Box<dyn CueSource>);
        let history = SessionHistory::new(config.history_limit);
        Ok(Self {
            config,
            clock,
            cue_factory,
            stats: UserStats::initial(),
            active: None,
            view: View::Home,
            history,
        })
    }

    /// Start from existing statistics.
    pub fn with_stats(mut self, stats: UserStats) -> Self {
        self.stats = stats;
        self
    }

    /// Replace how n-back cue sources are created.
    pub fn with_cue_factory(
        mut self,
        factory: impl FnMut() -> Box<dyn CueSource> + 'static,
    ) -> Self {
        self.cue_factory = Box::new(factory);
        self
    }

    /// Current statistics.
    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    /// Current screen.
    pub fn view(&self) -> View {
        self.view
    }

    /// Navigate to a screen.
    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Games played so far.
    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The mounted game.
    pub fn active_game(&self) -> Option<&ActiveGame> {
        self.active.as_ref()
    }

    /// The mounted n-back game.
    pub fn nback(&self) -> Option<&NBackGame> {
        match &self.active {
            Some(ActiveGame::NBack(game)) => Some(game),
            _ => None,
        }
    }

    /// The mounted paired-associates game.
    pub fn paired(&self) -> Option<&PairedAssociatesGame> {
        match &self.active {
            Some(ActiveGame::PairedAssociates(game)) => Some(game),
            _ => None,
        }
    }

    /// Mount a fresh game for `id`, silently replacing any active game.
    pub fn select_game(&mut self, id: ExerciseId) -> GameResult<()> {
        let game = match id {
            ExerciseId::NBack => ActiveGame::NBack(NBackGame::new(
                self.config.nback.clone(),
                (self.cue_factory)(),
                Arc::clone(&self.clock),
            )?),
            ExerciseId::PairedAssociates => ActiveGame::PairedAssociates(
                PairedAssociatesGame::new(self.config.paired.pairs.clone())?,
            ),
            other => ActiveGame::Unavailable(other),
        };
        if let Some(previous) = self.active.replace(game) {
            debug!(previous = %previous.exercise(), "active game replaced");
        }
        self.view = View::Train;
        debug!(exercise = %id, "game selected");
        Ok(())
    }

    /// Apply a finished game's score and clear the active game.
    ///
    /// Returns the updated statistics.
    pub fn on_game_complete(&mut self, score: u32) -> GameResult<&UserStats> {
        let game = self.active.take().ok_or(GameError::NoActiveGame)?;
        let exercise = game.exercise();
        let score = score.min(MAX_SCORE);
        self.stats = apply_score(&self.stats, score);
        self.history.push(
            exercise,
            SessionOutcome::Completed {
                score,
                xp: self.stats.xp,
                level: self.stats.level,
            },
        );
        self.view = View::Home;
        info!(
            exercise = %exercise,
            score,
            xp = self.stats.xp,
            level = self.stats.level,
            "game completed"
        );
        Ok(&self.stats)
    }

    /// Abandon the active game. Statistics are not touched.
    pub fn on_game_cancel(&mut self) -> GameResult<()> {
        let mut game = self.active.take().ok_or(GameError::NoActiveGame)?;
        // A mounted game is never finished or cancelled.
        match &mut game {
            ActiveGame::NBack(g) => g.cancel()?,
            ActiveGame::PairedAssociates(g) => g.cancel()?,
            ActiveGame::Unavailable(_) => {}
        }
        self.history.push(game.exercise(), SessionOutcome::Cancelled);
        info!(exercise = %game.exercise(), "game cancelled");
        Ok(())
    }

    /// Start the mounted n-back game.
    pub fn start_nback(&mut self) -> GameResult<()> {
        self.nback_mut()?.start()
    }

    /// Restart the mounted n-back game with a new sequence.
    pub fn restart_nback(&mut self) -> GameResult<()> {
        self.nback_mut()?.restart()
    }

    /// Declare an n-back match. Returns whether it was correct.
    pub fn press_match(&mut self) -> GameResult<bool> {
        self.nback_mut()?.handle_match()
    }

    /// Let the mounted n-back game catch up with the clock.
    ///
    /// Returns the completion if the game finished; its score has already
    /// been applied to the statistics.
    pub fn poll(&mut self) -> GameResult<Option<Completion>> {
        let score = match &mut self.active {
            Some(ActiveGame::NBack(game)) => game.poll(),
            _ => None,
        };
        self.finish(ExerciseId::NBack, score)
    }

    /// Move the mounted paired-associates game from study to test.
    pub fn begin_test(&mut self) -> GameResult<()> {
        self.paired_mut()?.begin_test()
    }

    /// Submit a recall answer to the mounted paired-associates game.
    ///
    /// Returns the completion after the last cue; its score has already been
    /// applied to the statistics.
    pub fn submit_answer(&mut self, answer: &str) -> GameResult<Option<Completion>> {
        let score = self.paired_mut()?.submit_answer(answer)?;
        self.finish(ExerciseId::PairedAssociates, score)
    }

    fn finish(
        &mut self,
        exercise: ExerciseId,
        score: Option<u32>,
    ) -> GameResult<Option<Completion>> {
        match score {
            Some(score) => {
                self.on_game_complete(score)?;
                Ok(Some(Completion { exercise, score }))
            }
            None => Ok(None),
        }
    }

    fn nback_mut(&mut self) -> GameResult<&mut NBackGame> {
        match &mut self.active {
            Some(ActiveGame::NBack(game)) => Ok(game),
            Some(other) => Err(wrong_game(other, ExerciseId::NBack)),
            None => Err(GameError::NoActiveGame),
        }
    }

    fn paired_mut(&mut self) -> GameResult<&mut PairedAssociatesGame> {
        match &mut self.active {
            Some(ActiveGame::PairedAssociates(game)) => Ok(game),
            Some(other) => Err(wrong_game(other, ExerciseId::PairedAssociates)),
            None => Err(GameError::NoActiveGame),
        }
    }
}

fn wrong_game(active: &ActiveGame, expected: ExerciseId) -> GameError {
    match active {
        ActiveGame::Unavailable(id) => GameError::Unavailable(*id),
        other => GameError::WrongGame {
            active: other.exercise(),
            expected,
        },
    }
}
