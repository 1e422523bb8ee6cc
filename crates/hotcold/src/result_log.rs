//! Append-only record of finished sessions.
//!
//! The on-disk format is a pretty-printed JSON array:
//!
//! ```json
//! [
//!   { "date": "2026-10-16T18:04:11.52Z", "win": true, "attemptsUsed": 3 }
//! ]
//! ```
//!
//! The whole array is rewritten on every append.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::ResultLogError;

/// Persisted result of one finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct SessionOutcome {
    /// When the session ended.
    #[serde(rename = "date")]
    timestamp: DateTime<Utc>,
    /// Whether the secret was guessed.
    #[serde(rename = "win")]
    won: bool,
    /// Number of guesses made, at least one.
    attempts_used: usize,
}

impl SessionOutcome {
    /// Records an outcome that ended now.
    #[instrument]
    pub fn now(won: bool, attempts_used: usize) -> Self {
        debug_assert!(attempts_used >= 1, "a session ends only after a guess");
        Self::new(Utc::now(), won, attempts_used)
    }
}

/// Storage for session outcomes.
pub trait ResultStore {
    /// Appends an outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ResultLogError`] if the outcome could not be persisted.
    fn append(&mut self, outcome: SessionOutcome) -> Result<(), ResultLogError>;

    /// Returns every recorded outcome, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ResultLogError`] if the store cannot be read.
    fn load_all(&self) -> Result<Vec<SessionOutcome>, ResultLogError>;
}

/// Result log backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonResultLog {
    path: PathBuf,
    entries: Vec<SessionOutcome>,
}

impl JsonResultLog {
    /// Opens the log at `path`, loading prior history.
    ///
    /// A missing, unreadable or malformed file is treated as an empty history.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            match Self::read_file(&path) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(error = %e, "Ignoring unreadable result log");
                    Vec::new()
                }
            }
        } else {
            debug!("No result log yet");
            Vec::new()
        };
        info!(count = entries.len(), "Result log opened");
        Self { path, entries }
    }

    /// Reads and parses a log file.
    ///
    /// # Errors
    ///
    /// Returns [`ResultLogError`] if the file cannot be read or is not a JSON
    /// array of outcomes.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn read_file(path: &Path) -> Result<Vec<SessionOutcome>, ResultLogError> {
        let data = fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&data)?)
    }

    /// Returns the file backing this log.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self) -> Result<(), ResultLogError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ResultLogError::new(format!("Failed to create '{}': {}", parent.display(), e))
            })?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json).map_err(|e| {
            ResultLogError::new(format!("Failed to write '{}': {}", self.path.display(), e))
        })
    }
}

impl ResultStore for JsonResultLog {
    /// Keeps the outcome in memory even when the write fails, so the next
    /// successful write still includes it.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn append(&mut self, outcome: SessionOutcome) -> Result<(), ResultLogError> {
        self.entries.push(outcome);
        self.write_file()?;
        info!(count = self.entries.len(), "Outcome recorded");
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<SessionOutcome>, ResultLogError> {
        Ok(self.entries.clone())
    }
}

/// In-memory result log.
#[derive(Debug, Clone, Default)]
pub struct MemoryResultLog {
    entries: Vec<SessionOutcome>,
}

impl MemoryResultLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryResultLog {
    fn append(&mut self, outcome: SessionOutcome) -> Result<(), ResultLogError> {
        self.entries.push(outcome);
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<SessionOutcome>, ResultLogError> {
        Ok(self.entries.clone())
    }
}

/// Aggregated statistics over recorded outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ResultSummary {
    total_games: usize,
    wins: usize,
    losses: usize,
    best_win: Option<usize>,
}

impl ResultSummary {
    /// Aggregates a sequence of outcomes.
    #[instrument(skip(outcomes), fields(count = outcomes.len()))]
    pub fn from_outcomes(outcomes: &[SessionOutcome]) -> Self {
        let wins = outcomes.iter().filter(|o| o.won).count();
        let best_win = outcomes
            .iter()
            .filter(|o| o.won)
            .map(|o| o.attempts_used)
            .min();
        Self {
            total_games: outcomes.len(),
            wins,
            losses: outcomes.len() - wins,
            best_win,
        }
    }

    /// Calculates win rate as a percentage (0.0–100.0).
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            (self.wins as f64 / self.total_games as f64) * 100.0
        }
    }
}

impl std::fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Games played: {}, won: {}, lost: {} ({:.1}% wins)",
            self.total_games,
            self.wins,
            self.losses,
            self.win_rate()
        )?;
        if let Some(best) = self.best_win {
            write!(f, ", best win in {} attempt(s)", best)?;
        }
        Ok(())
    }
}
