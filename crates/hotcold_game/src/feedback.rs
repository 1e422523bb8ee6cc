//! Proximity and direction feedback for a single guess.
//!
//! Thresholds are absolute distances and do not scale with the tier's range:
//! "hot" on 1–200 is exactly as narrow as on 1–50.

use tracing::instrument;

/// Largest distance still classified as [`Proximity::Hot`].
pub const HOT_DISTANCE: u64 = 5;

/// Largest distance still classified as [`Proximity::Warm`].
pub const WARM_DISTANCE: u64 = 15;

/// How close a missed guess landed to the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Proximity {
    /// Within 5 of the secret.
    #[display("Hot")]
    Hot,
    /// Within 15 of the secret.
    #[display("Warm")]
    Warm,
    /// More than 15 away.
    #[display("Cold")]
    Cold,
}

impl Proximity {
    /// Classifies an absolute distance from the secret.
    ///
    /// A distance of zero is an exact match and must be handled before
    /// calling this; it would otherwise read as [`Proximity::Hot`].
    #[instrument]
    pub fn from_distance(distance: u64) -> Self {
        if distance <= HOT_DISTANCE {
            Self::Hot
        } else if distance <= WARM_DISTANCE {
            Self::Warm
        } else {
            Self::Cold
        }
    }
}

/// Where the secret lies relative to a missed guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Direction {
    /// The guess was too high.
    #[display("The secret number is lower")]
    Lower,
    /// The guess was too low.
    #[display("The secret number is higher")]
    Higher,
}

impl Direction {
    /// Direction from `guess` towards `secret`. Callers exclude equality.
    pub fn towards(guess: i64, secret: i64) -> Self {
        if guess > secret { Self::Lower } else { Self::Higher }
    }
}

/// Proximity and direction for a missed guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct Hint {
    /// How close the guess was.
    pub proximity: Proximity,
    /// Which way to go next.
    pub direction: Direction,
}

impl Hint {
    /// Builds the hint for a guess that missed the secret.
    #[instrument]
    pub fn for_miss(guess: i64, secret: i64) -> Self {
        Self {
            proximity: Proximity::from_distance(guess.abs_diff(secret)),
            direction: Direction::towards(guess, secret),
        }
    }
}

/// Result tag of a submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched the secret.
    Win,
    /// The guess missed and attempts remain.
    Hint(Hint),
    /// The guess missed and no attempts remain.
    Loss {
        /// Hint for the final guess.
        hint: Hint,
        /// The secret, revealed now that the round is over.
        secret: i64,
    },
}

impl GuessOutcome {
    /// Returns the hint for a miss, `None` for a win.
    pub fn hint(&self) -> Option<Hint> {
        match self {
            Self::Win => None,
            Self::Hint(hint) | Self::Loss { hint, .. } => Some(*hint),
        }
    }

    /// Returns true if this guess ended the round.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Hint(_))
    }
}
