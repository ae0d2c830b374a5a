//! Move definitions and the validated move catalog.
//!
//! Moves are immutable content: the catalog is loaded once (see
//! `ringside-content`) and consumed read-only by the match engine and the
//! training screen. Indices into the catalog are what the profile's equipped
//! slots and the save file store.

use std::fmt;

/// Whether a move damages the opponent or restores the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    /// Punches: reduce the target's HP.
    Attack,
    /// Blocks and slips: restore the user's HP (read: stamina).
    Heal,
}

/// Integer bounds a move's value is sampled from, half-open `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueRange {
    pub min: u32,
    pub max: u32,
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// One entry of the move catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveDef {
    pub name: String,
    pub kind: MoveKind,
    pub range: ValueRange,
    /// Hit chance in percent. A roll in [1,100) must be strictly below this
    /// for the move to land.
    pub chance: u32,
    /// Minimum win count before the move shows up in training.
    pub wins_required: u32,
    pub description: String,
}

/// Errors raised when validating catalog content.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog contains no moves")]
    Empty,

    #[error("move `{name}` has inverted value range {min}-{max}")]
    InvertedRange { name: String, min: u32, max: u32 },

    #[error("move `{name}` has hit chance {chance} outside 1..=100")]
    ChanceOutOfRange { name: String, chance: u32 },
}

/// Ordered, validated list of every move in the game.
#[derive(Clone, Debug)]
pub struct MoveCatalog {
    moves: Vec<MoveDef>,
}

impl MoveCatalog {
    /// Validates and wraps a list of move definitions.
    pub fn new(moves: Vec<MoveDef>) -> Result<Self, CatalogError> {
        if moves.is_empty() {
            return Err(CatalogError::Empty);
        }
        for mv in &moves {
            if mv.range.min > mv.range.max {
                return Err(CatalogError::InvertedRange {
                    name: mv.name.clone(),
                    min: mv.range.min,
                    max: mv.range.max,
                });
            }
            if mv.chance == 0 || mv.chance > 100 {
                return Err(CatalogError::ChanceOutOfRange {
                    name: mv.name.clone(),
                    chance: mv.chance,
                });
            }
        }
        Ok(Self { moves })
    }

    pub fn get(&self, index: usize) -> Option<&MoveDef> {
        self.moves.get(index)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveDef> {
        self.moves.iter()
    }

    /// Number of moves visible in training for the given win count.
    ///
    /// Unlocks are monotone in the catalog (sorted by `wins_required`), so
    /// the unlocked moves form a prefix and navigation can treat this as an
    /// exclusive upper bound.
    pub fn unlocked_count(&self, wins: u32) -> usize {
        self.moves
            .iter()
            .filter(|mv| mv.wins_required <= wins)
            .count()
    }
}
