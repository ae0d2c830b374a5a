//! Move catalog loader.

use std::path::Path;

use ringside_core::{MoveCatalog, MoveDef};

use crate::{LoadResult, read_file};

/// Built-in move catalog document.
const BUILTIN_MOVES: &str = include_str!("../data/moves.ron");

/// On-disk shape of the catalog document.
#[derive(serde::Deserialize)]
struct CatalogDoc {
    moves: Vec<MoveDef>,
}

/// Loader for the move catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate a move catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<MoveCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load move catalog {}: {}", path.display(), e))
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> LoadResult<MoveCatalog> {
        Self::parse(BUILTIN_MOVES)
            .map_err(|e| anyhow::anyhow!("Built-in move catalog is invalid: {}", e))
    }

    fn parse(content: &str) -> LoadResult<MoveCatalog> {
        let doc: CatalogDoc = ron::from_str(content)?;
        Ok(MoveCatalog::new(doc.moves)?)
    }
}
