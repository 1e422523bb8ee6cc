//! Session controller: the outer game loop.
//!
//! Each round asks for a difficulty, plays one [`GameSession`] to the end,
//! records the outcome and asks whether to play again. Every bad answer is
//! re-prompted; only a terminal failure ends the loop early.

use derive_getters::Getters;
use hotcold_game::{
    Difficulty, Direction, GameSession, GuessFeedback, GuessOutcome, Hint, Proximity,
    RangePicker, SessionState,
};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

use crate::input::{parse_difficulty, parse_guess, parse_replay};
use crate::{BoundaryError, LineSource, MessageSink, ResultStore, ResultSummary, SessionOutcome, Tone};

/// Drives rounds against injected input, output, randomness and storage.
#[derive(Debug, Getters)]
pub struct SessionController<I, O, P, S> {
    input: I,
    output: O,
    picker: P,
    store: S,
}

impl<I, O, P, S> SessionController<I, O, P, S>
where
    I: LineSource,
    O: MessageSink,
    P: RangePicker,
    S: ResultStore,
{
    /// Creates a controller over the given capabilities.
    pub fn new(input: I, output: O, picker: P, store: S) -> Self {
        Self {
            input,
            output,
            picker,
            store,
        }
    }

    /// Plays rounds until the player declines another.
    ///
    /// # Errors
    ///
    /// Returns an error only when the terminal fails (for example input is
    /// closed) or the session contract is broken.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> anyhow::Result<()> {
        info!("Starting game loop");
        self.show_history()?;

        loop {
            let difficulty = self.choose_difficulty()?;
            let session = self.play_session(difficulty)?;
            self.record(&session)?;
            if !self.ask_play_again()? {
                break;
            }
        }

        info!("Game loop finished");
        Ok(())
    }

    /// Consumes the controller, returning its capabilities.
    pub fn into_parts(self) -> (I, O, P, S) {
        (self.input, self.output, self.picker, self.store)
    }

    fn show_history(&mut self) -> Result<(), BoundaryError> {
        match self.store.load_all() {
            Ok(outcomes) if !outcomes.is_empty() => {
                let summary = ResultSummary::from_outcomes(&outcomes);
                self.output.say(Tone::Info, &summary.to_string())
            }
            Ok(_) => Ok(()),
            Err(e) => {
                warn!(error = %e, "Could not load previous results");
                Ok(())
            }
        }
    }

    /// Prompts until a valid difficulty is chosen.
    #[instrument(skip(self))]
    pub fn choose_difficulty(&mut self) -> Result<Difficulty, BoundaryError> {
        let menu = Difficulty::iter()
            .map(|d| {
                let tier = d.tier();
                format!(
                    "{} - {}: {}–{}, {} attempts",
                    d.selector(),
                    d,
                    tier.lower_bound(),
                    tier.upper_bound(),
                    tier.attempt_budget()
                )
            })
            .collect::<Vec<_>>()
            .join("; ");

        loop {
            self.output.say(Tone::Plain, &menu)?;
            self.output.prompt(Tone::Plain, "Choose a difficulty: ")?;
            let line = self.input.read_line()?;
            match parse_difficulty(&line) {
                Ok(difficulty) => {
                    debug!(%difficulty, "Difficulty chosen");
                    return Ok(difficulty);
                }
                Err(e) => {
                    debug!(error = %e, "Rejected difficulty");
                    self.output.say(Tone::Error, &format!("Error: {e}"))?;
                }
            }
        }
    }

    /// Plays one session from the first guess until it is won or lost.
    ///
    /// # Errors
    ///
    /// Fails on terminal errors, or if the session refuses a guess while the
    /// loop still considers it active.
    #[instrument(skip(self))]
    pub fn play_session(&mut self, difficulty: Difficulty) -> anyhow::Result<GameSession> {
        let mut session = GameSession::new(difficulty, &mut self.picker);
        let tier = *session.tier();
        self.output.say(
            Tone::Success,
            &format!(
                "{difficulty} game started: guess the number from {} to {}!",
                tier.lower_bound(),
                tier.upper_bound()
            ),
        )?;
        self.output.say(
            Tone::Info,
            &format!("You have {} attempts.", tier.attempt_budget()),
        )?;

        let mut prompt_number = 0u32;
        while session.state() == SessionState::Active {
            prompt_number += 1;
            if !session.history().is_empty() {
                let tried = session
                    .history()
                    .iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                self.output
                    .say(Tone::Plain, &format!("Numbers already tried: {tried}"))?;
            }
            self.output.prompt(
                Tone::Plain,
                &format!("Attempt #{prompt_number} - enter a number: "),
            )?;

            let line = self.input.read_line()?;
            let guess = match parse_guess(&line) {
                Ok(guess) => guess,
                Err(e) => {
                    debug!(error = %e, "Rejected guess");
                    self.output.say(Tone::Error, "That is not a number")?;
                    continue;
                }
            };

            let feedback = session.submit_guess(guess)?;
            self.render(&feedback)?;
        }

        Ok(session)
    }

    fn render(&mut self, feedback: &GuessFeedback) -> Result<(), BoundaryError> {
        match feedback.outcome() {
            GuessOutcome::Win => self.output.say(Tone::Success, "Hooray! You win!"),
            GuessOutcome::Hint(hint) => {
                self.render_hint(hint)?;
                self.output.say(
                    Tone::Info,
                    &format!("Attempts left: {}", feedback.attempts_remaining()),
                )
            }
            GuessOutcome::Loss { hint, secret } => {
                self.render_hint(hint)?;
                self.output.say(Tone::Info, "Attempts left: 0")?;
                self.output.say(
                    Tone::Error,
                    &format!("Out of attempts, you lose. The number was {secret}."),
                )
            }
        }
    }

    fn render_hint(&mut self, hint: &Hint) -> Result<(), BoundaryError> {
        let proximity = match hint.proximity {
            Proximity::Hot => "🔥 Hot",
            Proximity::Warm => "🙂 Warm",
            Proximity::Cold => "❄️  Cold",
        };
        self.output.say(Tone::Plain, proximity)?;
        let arrow = match hint.direction {
            Direction::Lower => "👇",
            Direction::Higher => "👆",
        };
        self.output
            .say(Tone::Plain, &format!("{} {arrow}", hint.direction))
    }

    /// Appends the finished session to the result log.
    ///
    /// A storage failure is reported to the player and otherwise ignored.
    #[instrument(skip(self, session), fields(state = ?session.state()))]
    pub fn record(&mut self, session: &GameSession) -> Result<SessionOutcome, BoundaryError> {
        let outcome = SessionOutcome::now(session.is_won(), session.attempts_used());
        if let Err(e) = self.store.append(outcome.clone()) {
            warn!(error = %e, "Failed to persist outcome");
            self.output.say(
                Tone::Error,
                &format!("Could not save the result: {}", e.message),
            )?;
        }
        Ok(outcome)
    }

    /// Asks whether to play again until the answer is `1` or `0`.
    #[instrument(skip(self))]
    pub fn ask_play_again(&mut self) -> Result<bool, BoundaryError> {
        self.output
            .prompt(Tone::Plain, "Play again? 1 - Yes; 0 - No: ")?;
        loop {
            let line = self.input.read_line()?;
            match parse_replay(&line) {
                Ok(answer) => return Ok(answer),
                Err(e) => {
                    debug!(error = %e, "Rejected replay answer");
                    self.output.prompt(Tone::Warning, "Enter 1 or 0: ")?;
                }
            }
        }
    }
}
