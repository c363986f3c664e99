use memora_core::ExerciseId;
use serde::Serialize;

use crate::nback::NBackGame;
use crate::paired::PairedAssociatesGame;

/// A finished game's result, reported exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// The exercise that was played.
    pub exercise: ExerciseId,
    /// Final score in `0..=100`.
    pub score: u32,
}

/// The game currently mounted by the session controller.
#[derive(Debug)]
pub enum ActiveGame {
    /// A running n-back game.
    NBack(NBackGame),
    /// A running paired-associates game.
    PairedAssociates(PairedAssociatesGame),
    /// A catalog exercise without a game yet; it can only be dismissed.
    Unavailable(ExerciseId),
}

impl ActiveGame {
    /// The catalog exercise this game belongs to.
    pub fn exercise(&self) -> ExerciseId {
        match self {
            Self::NBack(_) => ExerciseId::NBack,
            Self::PairedAssociates(_) => ExerciseId::PairedAssociates,
            Self::Unavailable(id) => *id,
        }
    }
}
