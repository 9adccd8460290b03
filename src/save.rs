//! JSON persistence for the single save slot at `~/.wayfarer/save.json`.
//!
//! Saves are fire-and-forget: a failed write is logged and play continues
//! on in-memory state. A missing or malformed save file simply means
//! starting without a character.

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::core::constants::SAVE_FILE_VERSION;
use crate::core::session::GameSession;

const SAVE_FILENAME: &str = "save.json";

/// The one persisted record: the character plus the combat log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRecord {
    pub version: u32,
    pub character: Character,
    #[serde(default)]
    pub combat_log: Vec<String>,
    #[serde(default)]
    pub last_save_time: i64,
}

pub struct SaveManager {
    save_dir: PathBuf,
}

impl SaveManager {
    /// Uses `~/.wayfarer/`, creating it if needed.
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        Ok(Self::with_dir(home_dir.join(".wayfarer")))
    }

    /// Uses an explicit directory. Tests point this at a temp dir.
    pub fn with_dir(save_dir: PathBuf) -> Self {
        Self { save_dir }
    }

    fn save_path(&self) -> PathBuf {
        self.save_dir.join(SAVE_FILENAME)
    }

    pub fn save_exists(&self) -> bool {
        self.save_path().is_file()
    }

    /// Writes the session's character and log. A session without a
    /// character has nothing to persist and is skipped.
    pub fn save(&self, session: &GameSession) -> io::Result<()> {
        let Some(character) = &session.character else {
            return Ok(());
        };

        let record = SaveRecord {
            version: SAVE_FILE_VERSION,
            character: character.clone(),
            combat_log: session.combat_log.iter().cloned().collect(),
            last_save_time: Utc::now().timestamp(),
        };

        fs::create_dir_all(&self.save_dir)?;
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.save_path(), json)?;
        Ok(())
    }

    /// Loads and repairs the saved record. Returns `None` when the file is
    /// missing; a malformed payload is reported on stderr and also yields
    /// `None` so the game starts fresh instead of crashing.
    pub fn load(&self) -> Option<SaveRecord> {
        let path = self.save_path();
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                eprintln!("wayfarer: could not read {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<SaveRecord>(&json) {
            Ok(mut record) => {
                record.character.repair();
                Some(record)
            }
            Err(e) => {
                eprintln!("wayfarer: corrupt save {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Removes the save file (reset-game intent).
    pub fn delete(&self) -> io::Result<()> {
        let path = self.save_path();
        if path.is_file() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
