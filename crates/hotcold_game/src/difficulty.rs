//! Fixed catalog of difficulty tiers.

use derive_getters::Getters;
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{debug, instrument};

use crate::GameError;

/// Lowest number any tier can draw.
const LOWER_BOUND: i64 = 1;

/// A difficulty selectable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Difficulty {
    /// 1–50, 15 attempts.
    Easy,
    /// 1–100, 10 attempts.
    Medium,
    /// 1–200, 5 attempts.
    Hard,
}

/// Range and attempt budget of a difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Tier {
    lower_bound: i64,
    upper_bound: i64,
    attempt_budget: u32,
}

impl Difficulty {
    /// Menu selector for this difficulty (1, 2 or 3).
    pub fn selector(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Looks up the difficulty for a menu selector.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDifficulty`] for anything but 1, 2 or 3.
    #[instrument]
    pub fn from_selector(selector: i64) -> Result<Self, GameError> {
        Self::iter()
            .find(|d| i64::from(d.selector()) == selector)
            .ok_or_else(|| GameError::InvalidDifficulty(selector.to_string()))
    }

    /// Returns the range and attempt budget of this difficulty.
    pub fn tier(self) -> Tier {
        let (upper_bound, attempt_budget) = match self {
            Self::Easy => (50, 15),
            Self::Medium => (100, 10),
            Self::Hard => (200, 5),
        };
        Tier {
            lower_bound: LOWER_BOUND,
            upper_bound,
            attempt_budget,
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let selector = trimmed
            .parse::<i64>()
            .map_err(|_| GameError::InvalidDifficulty(trimmed.to_string()))?;
        Self::from_selector(selector)
    }
}

/// Resolves a menu selector to its tier.
///
/// # Errors
///
/// Returns [`GameError::InvalidDifficulty`] for anything but 1, 2 or 3.
#[instrument]
pub fn resolve(selector: i64) -> Result<Tier, GameError> {
    let difficulty = Difficulty::from_selector(selector)?;
    let tier = difficulty.tier();
    debug!(%difficulty, upper = tier.upper_bound, budget = tier.attempt_budget, "Resolved tier");
    Ok(tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_follow_menu_order() {
        let selectors: Vec<u8> = Difficulty::iter().map(Difficulty::selector).collect();
        assert_eq!(selectors, [1, 2, 3]);
    }

    #[test]
    fn from_str_trims_whitespace() {
        assert_eq!(" 2\n".parse::<Difficulty>(), Ok(Difficulty::Medium));
    }

    #[test]
    fn from_str_rejects_words() {
        assert!(matches!(
            "easy".parse::<Difficulty>(),
            Err(GameError::InvalidDifficulty(s)) if s == "easy"
        ));
    }
}
