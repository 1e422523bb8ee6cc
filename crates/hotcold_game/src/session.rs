//! Per-round game session.
//!
//! A session owns the secret, the remaining attempt budget and the guess
//! history. It starts [`SessionState::Active`] and ends in exactly one of
//! [`SessionState::Won`] or [`SessionState::Lost`]; once terminal it
//! refuses further guesses.

use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

use crate::{Difficulty, GameError, GuessOutcome, Hint, RangePicker, Tier};

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Accepting guesses.
    Active,
    /// A guess matched the secret.
    Won,
    /// The attempt budget ran out.
    Lost,
}

impl SessionState {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// What the player learns from one guess.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GuessFeedback {
    outcome: GuessOutcome,
    attempts_remaining: u32,
    history: Vec<i64>,
}

/// One round of the game.
#[derive(Debug, Clone)]
pub struct GameSession {
    difficulty: Difficulty,
    tier: Tier,
    secret: i64,
    attempts_remaining: u32,
    history: Vec<i64>,
    state: SessionState,
}

impl GameSession {
    /// Starts a round, drawing the secret from the tier's range.
    #[instrument(skip(picker))]
    pub fn new(difficulty: Difficulty, mut picker: impl RangePicker) -> Self {
        let tier = difficulty.tier();
        let secret = picker.pick(*tier.lower_bound(), *tier.upper_bound());
        debug_assert!((*tier.lower_bound()..=*tier.upper_bound()).contains(&secret));
        info!(%difficulty, budget = tier.attempt_budget(), "Session started");
        Self {
            difficulty,
            tier,
            secret,
            attempts_remaining: *tier.attempt_budget(),
            history: Vec::new(),
            state: SessionState::Active,
        }
    }

    /// Evaluates a guess and advances the state machine.
    ///
    /// An exact match wins regardless of the remaining budget. Any other
    /// guess costs one attempt; the session is lost when the budget reaches
    /// zero. Every accepted guess is appended to the history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SessionTerminated`] if the session already ended.
    /// The session is left unchanged in that case.
    #[instrument(skip(self), fields(state = ?self.state, remaining = self.attempts_remaining))]
    pub fn submit_guess(&mut self, guess: i64) -> Result<GuessFeedback, GameError> {
        if self.state.is_terminal() {
            warn!("Guess submitted after session ended");
            return Err(GameError::SessionTerminated);
        }

        self.history.push(guess);

        let outcome = if guess == self.secret {
            self.state = SessionState::Won;
            info!(attempts = self.history.len(), "Secret guessed");
            GuessOutcome::Win
        } else {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            let hint = Hint::for_miss(guess, self.secret);
            debug!(?hint, remaining = self.attempts_remaining, "Missed");
            if self.attempts_remaining == 0 {
                self.state = SessionState::Lost;
                info!(attempts = self.history.len(), "Attempts exhausted");
                GuessOutcome::Loss {
                    hint,
                    secret: self.secret,
                }
            } else {
                GuessOutcome::Hint(hint)
            }
        };

        Ok(GuessFeedback {
            outcome,
            attempts_remaining: self.attempts_remaining,
            history: self.history.clone(),
        })
    }

    /// Returns the difficulty this round was started with.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the range and budget of this round.
    pub fn tier(&self) -> &Tier {
        &self.tier
    }

    /// Returns the secret number.
    pub fn secret(&self) -> i64 {
        self.secret
    }

    /// Returns the number of attempts left.
    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Returns the guesses made so far, oldest first.
    pub fn history(&self) -> &[i64] {
        &self.history
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the number of guesses made.
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    /// Returns true once the secret has been guessed.
    pub fn is_won(&self) -> bool {
        self.state == SessionState::Won
    }
}
