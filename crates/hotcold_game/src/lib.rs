//! Hot/cold number-guessing game logic.
//!
//! This crate holds everything that can be decided without a terminal:
//!
//! - **Difficulty**: the fixed catalog of tiers (range and attempt budget)
//! - **Picker**: injectable source of the secret number
//! - **Feedback**: proximity tiers and direction hints for a guess
//! - **Session**: the per-round state machine
//!
//! # Example
//!
//! ```
//! use hotcold_game::{Difficulty, FixedPicker, GameSession, GuessOutcome};
//!
//! let mut picker = FixedPicker::new(25);
//! let mut session = GameSession::new(Difficulty::Easy, &mut picker);
//! let feedback = session.submit_guess(25).unwrap();
//! assert!(matches!(feedback.outcome(), GuessOutcome::Win));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod difficulty;
mod error;
mod feedback;
mod picker;
mod session;

pub use difficulty::{Difficulty, Tier, resolve};
pub use error::GameError;
pub use feedback::{Direction, GuessOutcome, Hint, Proximity};
pub use picker::{FixedPicker, RangePicker, ThreadRngPicker};
pub use session::{GameSession, GuessFeedback, SessionState};
