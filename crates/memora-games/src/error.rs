use memora_core::{CoreError, ExerciseId};

/// Alias for `Result<T, GameError>`.
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised by games and the session controller.
///
/// A rejected call never changes any score or attempt counter.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// An operation was called from a state that does not allow it.
    #[error("{game}: cannot {action} while {state}")]
    InvalidState {
        /// The game that rejected the call.
        game: &'static str,
        /// The attempted operation.
        action: &'static str,
        /// The state the game was in.
        state: String,
    },

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The controller has no active game to route the call to.
    #[error("no active game")]
    NoActiveGame,

    /// The active game is not the one the call was meant for.
    #[error("active game is {active}, not {expected}")]
    WrongGame {
        /// The game that is active.
        active: ExerciseId,
        /// The game the call expected.
        expected: ExerciseId,
    },

    /// The exercise exists in the catalog but has no playable game yet.
    #[error("{0} is not playable yet")]
    Unavailable(ExerciseId),

    /// A TOML config file could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A config file could not be read.
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the core model.
    #[error(transparent)]
    Core(#[from] CoreError),
}
