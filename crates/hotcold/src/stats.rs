//! Summary report over the result log.

use tracing::{info, instrument};

use crate::{MessageSink, ResultStore, ResultSummary, Tone};

/// Writes aggregated statistics for every recorded game.
///
/// # Errors
///
/// Fails if the store cannot be read or the output cannot be written.
#[instrument(skip_all)]
pub fn print_stats(store: &impl ResultStore, output: &mut impl MessageSink) -> anyhow::Result<()> {
    let outcomes = store.load_all()?;
    info!(count = outcomes.len(), "Reporting stats");
    if outcomes.is_empty() {
        output.say(Tone::Info, "No games recorded yet")?;
    } else {
        let summary = ResultSummary::from_outcomes(&outcomes);
        output.say(Tone::Info, &summary.to_string())?;
    }
    Ok(())
}
