//! Errors raised by the game rules.

/// Error that can occur when configuring or playing a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The difficulty selector is not one of the catalog entries.
    #[display("Invalid difficulty: {:?} (choose 1, 2 or 3)", _0)]
    InvalidDifficulty(String),

    /// A guess was submitted after the session ended.
    #[display("Session is already over")]
    SessionTerminated,
}

impl std::error::Error for GameError {}
