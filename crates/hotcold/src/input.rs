//! Parsing of raw player input lines.

use hotcold_game::{Difficulty, GameError};
use tracing::instrument;

use crate::InputError;

/// Parses a difficulty menu answer.
///
/// # Errors
///
/// Returns [`GameError::InvalidDifficulty`] for unparsable or unknown selectors.
#[instrument]
pub fn parse_difficulty(line: &str) -> Result<Difficulty, GameError> {
    line.parse()
}

/// Parses a guess.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] if the trimmed line is not an integer.
#[instrument]
pub fn parse_guess(line: &str) -> Result<i64, InputError> {
    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// Parses a "play again?" answer: exactly `1` (yes) or `0` (no).
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] for non-integers and
/// [`InputError::NotAChoice`] for any other integer.
#[instrument]
pub fn parse_replay(line: &str) -> Result<bool, InputError> {
    match parse_guess(line)? {
        1 => Ok(true),
        0 => Ok(false),
        other => Err(InputError::NotAChoice(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_accepts_negative_and_padded() {
        assert_eq!(parse_guess(" -3 "), Ok(-3));
    }

    #[test]
    fn guess_rejects_decimal() {
        assert_eq!(
            parse_guess("4.5"),
            Err(InputError::NotANumber("4.5".to_string()))
        );
    }

    #[test]
    fn replay_accepts_only_one_and_zero() {
        assert_eq!(parse_replay("1"), Ok(true));
        assert_eq!(parse_replay("0\n"), Ok(false));
        assert_eq!(parse_replay("-1"), Err(InputError::NotAChoice(-1)));
        assert_eq!(parse_replay("2"), Err(InputError::NotAChoice(2)));
        assert!(matches!(parse_replay("yes"), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_replay(""), Err(InputError::NotANumber(_))));
    }
}
