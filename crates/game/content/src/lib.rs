//! Data-driven game content and its loaders.
//!
//! This crate houses the static content the game consumes read-only:
//! - the move catalog (RON)
//! - the opponent roster (RON)
//!
//! Built-in copies of both documents are embedded so the game runs with no
//! data directory at all; a directory override loads the same file names
//! from disk instead. All loaders deserialize straight into `ringside-core`
//! types via serde.

pub mod catalog;
pub mod roster;

use std::path::Path;

pub use catalog::CatalogLoader;
pub use roster::{Opponent, Roster, RosterLoader};

use ringside_core::MoveCatalog;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Everything the client needs loaded before the first screen comes up.
pub struct GameContent {
    pub catalog: MoveCatalog,
    pub roster: Roster,
}

impl GameContent {
    /// Loads all content, from `data_dir` when given, otherwise from the
    /// built-in documents.
    pub fn load(data_dir: Option<&Path>) -> LoadResult<Self> {
        let (catalog, roster) = match data_dir {
            Some(dir) => (
                CatalogLoader::load(&dir.join("moves.ron"))?,
                RosterLoader::load(&dir.join("opponents.ron"))?,
            ),
            None => (CatalogLoader::builtin()?, RosterLoader::builtin()?),
        };
        Ok(Self { catalog, roster })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringside_core::ENEMY_FALLBACK_MOVE;
    use ringside_core::MoveKind;

    #[test]
    fn builtin_content_loads_and_validates() {
        let content = GameContent::load(None).expect("built-in content must parse");
        assert!(content.catalog.len() >= 5);
        assert_eq!(content.roster.len(), 4);
    }

    #[test]
    fn fallback_defensive_slot_is_a_heal() {
        let catalog = CatalogLoader::builtin().expect("built-in catalog must parse");
        let fallback = catalog
            .get(ENEMY_FALLBACK_MOVE)
            .expect("fallback index must exist");
        assert_eq!(fallback.kind, MoveKind::Heal);
    }

    #[test]
    fn starting_loadout_indices_exist() {
        let catalog = CatalogLoader::builtin().expect("built-in catalog must parse");
        for index in ringside_core::EquippedMoves::starting().iter_active() {
            let mv = catalog.get(index).expect("starting move must exist");
            assert_eq!(mv.wins_required, 0, "starting moves must be unlocked");
        }
    }
}
