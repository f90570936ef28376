//! The guessable word list.
//!
//! Loaded once at startup and shared immutably; sessions receive their
//! word by value so nothing global is ever mutated mid-game.

use std::fs;
use std::path::Path;

use rand::seq::IndexedRandom;

use crate::error::AppError;

static BUILTIN_WORDS: &str = include_str!("../../assets/words.csv");

#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// The embedded default list.
    pub fn builtin() -> Self {
        Self::from_lines(BUILTIN_WORDS).expect("builtin word list is non-empty")
    }

    /// Load a one-word-per-line file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("cannot read word list {}: {e}", path.display()))
        })?;
        Self::from_lines(&raw).map_err(|e| {
            AppError::config(format!("word list {}: {e}", path.display()))
        })
    }

    /// `GAME_WORDS_FILE` override when set, builtin list otherwise.
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var("GAME_WORDS_FILE") {
            Ok(path) => Self::load(Path::new(&path)),
            Err(_) => Ok(Self::builtin()),
        }
    }

    fn from_lines(raw: &str) -> Result<Self, String> {
        let words: Vec<String> = raw
            .lines()
            .map(|line| line.trim().to_ascii_lowercase())
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase()))
            .collect();
        if words.is_empty() {
            return Err("no usable words (need lowercase ascii, one per line)".to_string());
        }
        Ok(Self { words })
    }

    pub fn pick(&self) -> &str {
        self.words
            .choose(&mut rand::rng())
            .expect("word list is never empty")
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
