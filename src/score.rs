//! Cumulative score tally, persisted as JSON across sessions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::game::{GameOutcome, Player};

/// Win/loss/draw counters accumulated over completed games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBoard {
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
}

impl ScoreBoard {
    /// Bump the counter matching a completed game's outcome.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(Player::X, _) => self.x_wins += 1,
            GameOutcome::Winner(Player::O, _) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u64 {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn reset(&mut self) {
        *self = ScoreBoard::default();
    }
}

/// Loads and saves the score tally at a fixed path.
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the tally, starting from zero if the file does not exist yet.
    pub fn load_or_default(&self) -> Result<ScoreBoard, ScoreError> {
        if !self.path.exists() {
            return Ok(ScoreBoard::default());
        }
        let json = fs::read_to_string(&self.path).map_err(|e| ScoreError::FileRead {
            path: self.path.clone(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| ScoreError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Save the tally. Writes to a temporary file and renames it over the
    /// destination; the file on disk is always a complete tally.
    pub fn save(&self, scores: &ScoreBoard) -> Result<(), ScoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let json = serde_json::to_string_pretty(scores)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut scores = ScoreBoard::default();
        scores.record(GameOutcome::Winner(Player::X, [0, 1, 2]));
        scores.record(GameOutcome::Winner(Player::O, [0, 4, 8]));
        scores.record(GameOutcome::Winner(Player::O, [2, 5, 8]));
        scores.record(GameOutcome::Draw);

        assert_eq!(scores.x_wins, 1);
        assert_eq!(scores.o_wins, 2);
        assert_eq!(scores.draws, 1);
        assert_eq!(scores.total_games(), 4);
    }

    #[test]
    fn test_reset() {
        let mut scores = ScoreBoard {
            x_wins: 3,
            o_wins: 1,
            draws: 7,
        };
        scores.reset();
        assert_eq!(scores, ScoreBoard::default());
    }

    #[test]
    fn test_load_missing_file_is_zero_tally() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.json"));
        assert_eq!(store.load_or_default().unwrap(), ScoreBoard::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.json"));

        let scores = ScoreBoard {
            x_wins: 5,
            o_wins: 2,
            draws: 9,
        };
        store.save(&scores).unwrap();
        assert_eq!(store.load_or_default().unwrap(), scores);
    }

    #[test]
    fn test_save_overwrites_previous_tally() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.json"));

        let mut scores = ScoreBoard::default();
        store.save(&scores).unwrap();
        scores.record(GameOutcome::Draw);
        store.save(&scores).unwrap();

        assert_eq!(store.load_or_default().unwrap().draws, 1);
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("nested").join("scores.json"));
        store.save(&ScoreBoard::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "not json").unwrap();

        let store = ScoreStore::new(path);
        assert!(matches!(
            store.load_or_default(),
            Err(ScoreError::Parse { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, r#"{"x_wins": 4}"#).unwrap();

        let store = ScoreStore::new(path);
        let scores = store.load_or_default().unwrap();
        assert_eq!(scores.x_wins, 4);
        assert_eq!(scores.o_wins, 0);
        assert_eq!(scores.draws, 0);
    }
}
