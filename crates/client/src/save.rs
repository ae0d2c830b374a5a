//! Flat-file save repository.
//!
//! The save is four lines of text: win count, loss count, the four equipped
//! move slots joined with commas (−1 marking an open slot), and the score.
//! The format is trusted local data: anything malformed is reported as a
//! typed error and treated as fatal by the caller.

use std::path::{Path, PathBuf};

use ringside_core::{EQUIP_SLOTS, EquippedMoves, Profile};

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("no save file at {0}")]
    NotFound(PathBuf),

    #[error("failed to access save file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("save file is truncated: expected 4 lines, found {0}")]
    Truncated(usize),

    #[error("save line {line} is not a valid {what}: `{raw}`")]
    Malformed {
        line: usize,
        what: &'static str,
        raw: String,
    },

    #[error("save file has {found} equipped slots, expected {expected}")]
    SlotCount { found: usize, expected: usize },
}

/// Handle on the save file location.
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the save file into a profile.
    pub fn load(&self) -> Result<Profile, SaveError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SaveError::NotFound(self.path.clone())
            } else {
                SaveError::Io {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;
        let profile = decode(&text)?;
        tracing::info!(path = %self.path.display(), wins = profile.wins, "loaded save");
        Ok(profile)
    }

    /// Writes the profile out, creating parent directories as needed.
    pub fn save(&self, profile: &Profile) -> Result<(), SaveError> {
        self.write(&encode(profile))?;
        tracing::info!(path = %self.path.display(), wins = profile.wins, "saved game");
        Ok(())
    }

    /// Resets the save file to a fresh career.
    pub fn wipe(&self) -> Result<(), SaveError> {
        self.write(&encode(&Profile::fresh()))?;
        tracing::info!(path = %self.path.display(), "wiped save");
        Ok(())
    }

    fn write(&self, contents: &str) -> Result<(), SaveError> {
        let io_err = |source| SaveError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(&self.path, contents).map_err(io_err)
    }
}

fn encode(profile: &Profile) -> String {
    let slots: Vec<String> = profile
        .equipped
        .slots()
        .iter()
        .map(|s| s.to_string())
        .collect();
    format!(
        "{}\n{}\n{}\n{}\n",
        profile.wins,
        profile.losses,
        slots.join(","),
        profile.score,
    )
}

fn decode(text: &str) -> Result<Profile, SaveError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 4 {
        return Err(SaveError::Truncated(lines.len()));
    }

    let wins = parse_line(lines[0], 1, "win count")?;
    let losses = parse_line(lines[1], 2, "loss count")?;

    let mut slots = [0i32; EQUIP_SLOTS];
    let parts: Vec<&str> = lines[2].split(',').collect();
    if parts.len() != EQUIP_SLOTS {
        return Err(SaveError::SlotCount {
            found: parts.len(),
            expected: EQUIP_SLOTS,
        });
    }
    for (slot, part) in slots.iter_mut().zip(parts) {
        *slot = parse_line(part, 3, "move index")?;
    }

    let score = parse_line(lines[3], 4, "score")?;

    Ok(Profile {
        wins,
        losses,
        score,
        equipped: EquippedMoves::from_slots(slots),
    })
}

fn parse_line<T: std::str::FromStr>(
    raw: &str,
    line: usize,
    what: &'static str,
) -> Result<T, SaveError> {
    raw.trim().parse().map_err(|_| SaveError::Malformed {
        line,
        what,
        raw: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_save() -> (tempfile::TempDir, SaveFile) {
        let dir = tempfile::tempdir().expect("temp dir");
        let save = SaveFile::new(dir.path().join("save.txt"));
        (dir, save)
    }

    #[test]
    fn round_trips_a_profile() {
        let (_dir, save) = temp_save();
        let mut profile = Profile::fresh();
        profile.wins = 2;
        profile.losses = 5;
        profile.score = -40;
        profile.equipped.toggle(7);

        save.save(&profile).expect("save");
        let loaded = save.load().expect("load");
        assert_eq!(loaded, profile);
    }

    #[test]
    fn parses_the_documented_fixture() {
        let profile = decode("3\n1\n2,0,-1,-1\n150\n").expect("fixture parses");
        assert_eq!(profile.wins, 3);
        assert_eq!(profile.losses, 1);
        assert_eq!(profile.equipped.slots(), &[2, 0, -1, -1]);
        assert_eq!(profile.score, 150);
    }

    #[test]
    fn wipe_writes_the_default_career() {
        let (_dir, save) = temp_save();
        save.wipe().expect("wipe");
        let text = std::fs::read_to_string(save.path()).expect("read back");
        assert_eq!(text, "0\n0\n0,1,-1,-1\n0\n");
        assert_eq!(save.load().expect("load"), Profile::fresh());
    }

    #[test]
    fn missing_file_is_not_found() {
        let (_dir, save) = temp_save();
        assert!(matches!(save.load(), Err(SaveError::NotFound(_))));
    }

    #[test]
    fn truncated_file_is_rejected() {
        let (_dir, save) = temp_save();
        std::fs::write(save.path(), "3\n1\n").expect("write");
        assert!(matches!(save.load(), Err(SaveError::Truncated(2))));
    }

    #[test]
    fn garbage_numbers_are_rejected() {
        let (_dir, save) = temp_save();
        std::fs::write(save.path(), "three\n1\n0,1,-1,-1\n0\n").expect("write");
        assert!(matches!(
            save.load(),
            Err(SaveError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn wrong_slot_count_is_rejected() {
        let (_dir, save) = temp_save();
        std::fs::write(save.path(), "0\n0\n0,1,-1\n0\n").expect("write");
        assert!(matches!(
            save.load(),
            Err(SaveError::SlotCount {
                found: 3,
                expected: 4
            })
        ));
    }
}
