//! Memory-training games for Memora.
//!
//! Each game is a framework-free state machine driven by discrete calls:
//! user input (`handle_match`, `submit_answer`, ...) and, for the n-back
//! game, a one-shot timer checked against an injected [`Clock`]. Randomness
//! comes from an injected [`CueSource`], so every game can be replayed
//! deterministically on a [`ManualClock`].
//!
//! [`SessionController`] owns at most one active game and feeds each
//! completion score through [`memora_core::apply_score`].

/// Monotonic clocks: system time and a manually advanced virtual clock.
pub mod clock;
/// Configuration types for games and sessions.
pub mod config;
/// Injectable cue generators for the n-back game.
pub mod cues;
/// Error types for the games crate.
pub mod error;
/// The active-game wrapper and completion record.
pub mod game;
/// Bounded in-memory record of finished and cancelled games.
pub mod history;
/// The n-back state machine.
pub mod nback;
/// The paired-associates state machine.
pub mod paired;
/// Session controller: game selection and progression routing.
pub mod session;
/// One-shot timer handle with stale-fire protection.
pub mod timer;

/// Re-exports of the clock types.
pub use clock::{Clock, ManualClock, SystemClock};
/// Re-exports of the configuration types.
pub use config::{NBackConfig, PairedConfig, SessionConfig};
/// Re-exports of the cue source types.
pub use cues::{CueSource, ScriptedCues};
/// Re-exports of [`error::GameError`] and [`error::GameResult`].
pub use error::{GameError, GameResult};
/// Re-exports of the game wrapper types.
pub use game::{ActiveGame, Completion};
/// Re-exports of the history types.
pub use history::{SessionHistory, SessionOutcome, SessionRecord};
/// Re-exports of the n-back types.
pub use nback::{NBackGame, NBackState};
/// Re-exports of the paired-associates types.
pub use paired::{PairedAssociatesGame, PairedPhase, WordPair};
/// Re-exports of the session controller types.
pub use session::{SessionController, View};
/// Re-exports of the timer types.
pub use timer::{OneShotTimer, TimerId};
