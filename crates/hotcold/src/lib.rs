//! Hot/cold - terminal number-guessing game.
//!
//! The game rules live in [`hotcold_game`]; this crate wires them to a
//! line-oriented terminal and a persistent result log.
//!
//! # Architecture
//!
//! - **Controller**: the outer loop of difficulty, round, record and replay
//! - **I/O**: [`LineSource`] and [`MessageSink`] boundaries with terminal and
//!   scripted implementations
//! - **Result log**: append-only [`SessionOutcome`] storage (JSON file or memory)
//!
//! # Example
//!
//! ```
//! use hotcold::{MemoryResultLog, RecordingOutput, ScriptedInput, SessionController};
//! use hotcold_game::FixedPicker;
//!
//! let input = ScriptedInput::new(["1", "25", "0"]);
//! let mut controller = SessionController::new(
//!     input,
//!     RecordingOutput::new(),
//!     FixedPicker::new(25),
//!     MemoryResultLog::new(),
//! );
//! controller.run().unwrap();
//! assert!(controller.output().contains("You win"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
mod input;
mod io;
mod result_log;
mod stats;

pub use controller::SessionController;
pub use error::{BoundaryError, InputError, Location, ResultLogError};
pub use input::{parse_difficulty, parse_guess, parse_replay};
pub use io::{LineSource, MessageSink, RecordingOutput, ScriptedInput, TerminalInput, TerminalOutput, Tone};
pub use result_log::{JsonResultLog, MemoryResultLog, ResultStore, ResultSummary, SessionOutcome};
pub use stats::print_stats;
