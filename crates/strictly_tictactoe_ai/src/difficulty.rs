//! AI difficulty tiers.

use serde::{Deserialize, Serialize};

/// Skill level of an AI opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Mostly random with unreliable tactics.
    Easy,
    /// Rule-based tactics, beatable.
    Medium,
    /// Exhaustive search, never loses.
    Hard,
}

/// Display name and blurb for a difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiInfo {
    /// Short display name.
    pub name: &'static str,
    /// One-line description of the play style.
    pub description: &'static str,
}

impl Difficulty {
    /// Every difficulty, easiest first.
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Name and description without building a player.
    pub fn info(self) -> AiInfo {
        match self {
            Difficulty::Easy => AiInfo {
                name: "Easy AI",
                description: "Makes random moves with occasional strategic play",
            },
            Difficulty::Medium => AiInfo {
                name: "Medium AI",
                description: "Strategic play with tactical awareness",
            },
            Difficulty::Hard => AiInfo {
                name: "Hard AI",
                description: "Perfect play using minimax algorithm",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("impossible".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }
}
