use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Identifier of a catalog exercise, spelled in kebab-case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseId {
    /// Visual 1-back sequence matching.
    NBack,
    /// Word pair study followed by cued recall.
    PairedAssociates,
    /// Name-face association (not yet playable).
    NameFace,
    /// Timed flash recall (not yet playable).
    SpeedRecall,
}

impl ExerciseId {
    /// Every exercise id, in catalog order.
    pub const ALL: [ExerciseId; 4] = [
        Self::NBack,
        Self::PairedAssociates,
        Self::NameFace,
        Self::SpeedRecall,
    ];

    /// The kebab-case id string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NBack => "n-back",
            Self::PairedAssociates => "paired-associates",
            Self::NameFace => "name-face",
            Self::SpeedRecall => "speed-recall",
        }
    }

    /// Whether a game state machine exists for this exercise.
    pub fn is_playable(self) -> bool {
        matches!(self, Self::NBack | Self::PairedAssociates)
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseId {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == needle)
            .ok_or_else(|| CoreError::UnknownExercise(s.to_string()))
    }
}

/// The memory domain an exercise trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryCategory {
    /// Short-term manipulation of recent items.
    Working,
    /// Long-term recall of facts and pairings.
    Declarative,
    /// Linking unrelated items by meaning.
    Associative,
    /// Speed of retrieval under pressure.
    Fluency,
}

impl MemoryCategory {
    /// All categories, in display order.
    pub const ALL: [MemoryCategory; 4] = [
        Self::Working,
        Self::Declarative,
        Self::Associative,
        Self::Fluency,
    ];

    /// Default strength estimate for this domain, in percent, used until
    /// per-domain results are tracked.
    pub fn baseline_strength(self) -> u32 {
        85 - 10 * self as u32
    }
}

impl fmt::Display for MemoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Working => write!(f, "Working Memory"),
            Self::Declarative => write!(f, "Long-Term Declarative"),
            Self::Associative => write!(f, "Associative & Semantic"),
            Self::Fluency => write!(f, "Speed & Recall Fluency"),
        }
    }
}

/// A catalog entry describing one training exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    /// Stable identifier.
    pub id: ExerciseId,
    /// Display title.
    pub title: &'static str,
    /// One-sentence pitch shown in the library.
    pub description: &'static str,
    /// The memory domain trained.
    pub category: MemoryCategory,
    /// Difficulty from 1 (easy) to 3 (hard).
    pub difficulty: u8,
}

const CATALOG: [Exercise; 4] = [
    Exercise {
        id: ExerciseId::NBack,
        title: "Visual N-Back",
        description: "Track and match visual sequences to boost working memory capacity.",
        category: MemoryCategory::Working,
        difficulty: 2,
    },
    Exercise {
        id: ExerciseId::PairedAssociates,
        title: "Word Pairing",
        description: "Build neural connections by linking unrelated word pairs.",
        category: MemoryCategory::Declarative,
        difficulty: 1,
    },
    Exercise {
        id: ExerciseId::NameFace,
        title: "Name-Face Link",
        description: "Practice associating names with faces using elaborative encoding.",
        category: MemoryCategory::Associative,
        difficulty: 3,
    },
    Exercise {
        id: ExerciseId::SpeedRecall,
        title: "Timed Flash",
        description: "Enhance retrieval speed with high-pressure recall drills.",
        category: MemoryCategory::Fluency,
        difficulty: 2,
    },
];

impl Exercise {
    /// The full catalog, in library order.
    pub fn catalog() -> &'static [Exercise] {
        &CATALOG
    }

    /// The first `n` catalog entries, used for home-screen recommendations.
    pub fn recommended(n: usize) -> &'static [Exercise] {
        &CATALOG[..n.min(CATALOG.len())]
    }

    /// Look up the catalog entry for an id.
    pub fn get(id: ExerciseId) -> &'static Exercise {
        // CATALOG is ordered like the ExerciseId variants
        &CATALOG[id as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_round_trips_every_id() {
        for id in ExerciseId::ALL {
            assert_eq!(id.as_str().parse::<ExerciseId>().unwrap(), id);
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(
            "  N-Back ".parse::<ExerciseId>().unwrap(),
            ExerciseId::NBack
        );
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "chess".parse::<ExerciseId>().unwrap_err();
        assert!(err.to_string().contains("chess"));
    }

    #[test]
    fn catalog_lookup_matches_id() {
        for id in ExerciseId::ALL {
            assert_eq!(Exercise::get(id).id, id);
        }
    }

    #[test]
    fn only_two_games_are_playable() {
        let playable: Vec<_> = Exercise::catalog()
            .iter()
            .filter(|e| e.id.is_playable())
            .map(|e| e.id)
            .collect();
        assert_eq!(playable, vec![ExerciseId::NBack, ExerciseId::PairedAssociates]);
    }

    #[test]
    fn recommended_takes_prefix() {
        let rec = Exercise::recommended(2);
        assert_eq!(rec.len(), 2);
        assert_eq!(rec[0].id, ExerciseId::NBack);
        assert_eq!(Exercise::recommended(10).len(), 4);
    }

    #[test]
    fn difficulty_in_range() {
        assert!(Exercise::catalog().iter().all(|e| (1..=3).contains(&e.difficulty)));
    }

    #[test]
    fn category_display() {
        assert_eq!(MemoryCategory::Working.to_string(), "Working Memory");
        assert_eq!(MemoryCategory::Fluency.to_string(), "Speed & Recall Fluency");
    }

    #[test]
    fn baseline_strength_steps_down_by_domain() {
        let strengths: Vec<_> = MemoryCategory::ALL
            .iter()
            .map(|c| c.baseline_strength())
            .collect();
        assert_eq!(strengths, vec![85, 75, 65, 55]);
    }

    #[test]
    fn id_serializes_kebab_case() {
        let json = serde_json::to_string(&ExerciseId::PairedAssociates).unwrap();
        assert_eq!(json, "\"paired-associates\"");
    }

    proptest! {
        #[test]
        fn parse_ignores_case_and_padding(
            index in 0usize..4,
            upper in proptest::collection::vec(any::<bool>(), 20),
            left in 0usize..4,
            right in 0usize..4,
        ) {
            let id = ExerciseId::ALL[index];
            let cased: String = id
                .as_str()
                .chars()
                .zip(upper.iter().cycle())
                .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            let text = format!("{}{cased}{}", " ".repeat(left), "\t".repeat(right));
            prop_assert_eq!(text.parse::<ExerciseId>().ok(), Some(id));
        }
    }
}
