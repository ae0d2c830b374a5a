//! The session context threaded through every screen.
//!
//! One explicit struct passed by reference to screens and the match engine,
//! with the save file as the only load/save boundary. No globals.

use ringside_content::{GameContent, Roster};
use ringside_core::{MoveCatalog, Profile};

use crate::save::{SaveError, SaveFile};

pub struct Session {
    pub profile: Profile,
    pub catalog: MoveCatalog,
    pub roster: Roster,
    pub save: SaveFile,
}

impl Session {
    /// Builds a session around freshly loaded content and a fresh profile.
    pub fn new(content: GameContent, save: SaveFile) -> Self {
        Self {
            profile: Profile::fresh(),
            catalog: content.catalog,
            roster: content.roster,
            save,
        }
    }

    /// Replaces the in-memory profile with the saved one.
    pub fn load_profile(&mut self) -> Result<(), SaveError> {
        self.profile = self.save.load()?;
        Ok(())
    }

    /// Persists the in-memory profile.
    pub fn save_profile(&self) -> Result<(), SaveError> {
        self.save.save(&self.profile)
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        let content = GameContent::load(None).expect("built-in content must load");
        // The path is never touched unless a test explicitly saves.
        let dir = std::env::temp_dir().join("ringside-session-tests");
        Self::new(content, SaveFile::new(dir.join("save.txt")))
    }
}
