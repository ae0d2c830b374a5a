//! Opponent roster loader.
//!
//! Four opponents, one per rung of the player's win count. Record strings
//! fold the player's losses into the opponent's pro record, so every loss
//! makes the next card read a little scarier.

use std::path::Path;

use crate::{LoadResult, read_file};

/// Built-in roster document.
const BUILTIN_OPPONENTS: &str = include_str!("../data/opponents.ron");

/// Card data for one opponent.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Opponent {
    pub first_name: String,
    pub last_name: String,
    pub gym: String,
    pub ranking: u32,
    pub weight: u32,
    /// Wins printed on the card before the player's losses are added.
    pub base_wins: u32,
    /// Losses printed on the card (fixed).
    pub record_losses: u32,
    /// Knockouts printed on the card before the player's losses are added.
    pub base_kos: u32,
}

impl Opponent {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Pro record line for the matchup card, e.g. `8 - 2  5KO`.
    pub fn record_line(&self, player_losses: u32) -> String {
        format!(
            "{} - {}  {}KO",
            self.base_wins + player_losses,
            self.record_losses,
            self.base_kos + player_losses,
        )
    }
}

/// Ordered opponent list indexed by the player's win count.
#[derive(Clone, Debug)]
pub struct Roster {
    opponents: Vec<Opponent>,
}

impl Roster {
    pub fn new(opponents: Vec<Opponent>) -> LoadResult<Self> {
        if opponents.is_empty() {
            return Err(anyhow::anyhow!("opponent roster is empty"));
        }
        Ok(Self { opponents })
    }

    pub fn len(&self) -> usize {
        self.opponents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opponents.is_empty()
    }

    /// Opponent for the given win count, clamped to the final boss.
    pub fn for_wins(&self, wins: u32) -> &Opponent {
        let index = (wins as usize).min(self.opponents.len() - 1);
        &self.opponents[index]
    }
}

/// On-disk shape of the roster document.
#[derive(serde::Deserialize)]
struct RosterDoc {
    opponents: Vec<Opponent>,
}

/// Loader for the opponent roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load the opponent roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load roster {}: {}", path.display(), e))
    }

    /// The roster compiled into the binary.
    pub fn builtin() -> LoadResult<Roster> {
        Self::parse(BUILTIN_OPPONENTS)
            .map_err(|e| anyhow::anyhow!("Built-in roster is invalid: {}", e))
    }

    fn parse(content: &str) -> LoadResult<Roster> {
        let doc: RosterDoc = ron::from_str(content)?;
        Roster::new(doc.opponents)
    }
}
