//! Line-oriented terminal boundary.
//!
//! The controller only ever asks for "the next line" and hands out text
//! tagged with a [`Tone`]. How lines arrive and how tones are rendered is
//! decided here, so the game can run against a real terminal or a script.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crossterm::style::Stylize;
use tracing::{debug, instrument, trace};

use crate::BoundaryError;

/// Semantic category of an output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Uncategorized text.
    Plain,
    /// Neutral information (ranges, remaining attempts).
    Info,
    /// Good news (a win).
    Success,
    /// Soft rejection (re-prompt).
    Warning,
    /// Failure (invalid input, loss, persistence problems).
    Error,
}

/// Source of player input, one line at a time.
pub trait LineSource {
    /// Blocks until the next line is available and returns it without the
    /// trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError`] when input is closed or unreadable.
    fn read_line(&mut self) -> Result<String, BoundaryError>;
}

/// Destination for game output.
pub trait MessageSink {
    /// Writes a full line of text.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError`] if the output cannot be written.
    fn say(&mut self, tone: Tone, text: &str) -> Result<(), BoundaryError>;

    /// Writes a prompt and leaves the cursor on the same line.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError`] if the output cannot be written.
    fn prompt(&mut self, tone: Tone, text: &str) -> Result<(), BoundaryError>;
}

/// Reads lines from any buffered reader, typically locked stdin.
#[derive(Debug)]
pub struct TerminalInput<R> {
    reader: R,
}

impl<R: BufRead> TerminalInput<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for TerminalInput<R> {
    #[instrument(skip(self))]
    fn read_line(&mut self) -> Result<String, BoundaryError> {
        let mut buf = Vec::new();
        let read = self.reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            debug!("Input closed");
            return Err(BoundaryError::new("input closed"));
        }
        // Invalid UTF-8 is decoded lossily so the parsers reject it.
        let line = String::from_utf8_lossy(&buf);
        let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
        trace!(line = %trimmed, "Read line");
        Ok(trimmed)
    }
}

/// Writes to any writer, coloring by tone when enabled.
#[derive(Debug)]
pub struct TerminalOutput<W> {
    writer: W,
    color: bool,
}

impl<W: Write> TerminalOutput<W> {
    /// Wraps a writer. `color` turns ANSI styling on or off.
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    fn styled(&self, tone: Tone, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        match tone {
            Tone::Plain => text.to_string(),
            Tone::Info => text.cyan().to_string(),
            Tone::Success => text.green().to_string(),
            Tone::Warning => text.yellow().to_string(),
            Tone::Error => text.red().to_string(),
        }
    }
}

impl<W: Write> MessageSink for TerminalOutput<W> {
    fn say(&mut self, tone: Tone, text: &str) -> Result<(), BoundaryError> {
        let styled = self.styled(tone, text);
        writeln!(self.writer, "{styled}")?;
        Ok(())
    }

    fn prompt(&mut self, tone: Tone, text: &str) -> Result<(), BoundaryError> {
        let styled = self.styled(tone, text);
        write!(self.writer, "{styled}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Pre-recorded input. Running out of lines behaves like a closed terminal.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Creates a script from the given lines, consumed in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the number of lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> Result<String, BoundaryError> {
        self.lines
            .pop_front()
            .ok_or_else(|| BoundaryError::new("script exhausted"))
    }
}

/// Captures output in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingOutput {
    messages: Vec<(Tone, String)>,
}

impl RecordingOutput {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every message with its tone, prompts included.
    pub fn messages(&self) -> &[(Tone, String)] {
        &self.messages
    }

    /// Returns true if any message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|(_, text)| text.contains(needle))
    }

    /// Counts messages containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.messages
            .iter()
            .filter(|(_, text)| text.contains(needle))
            .count()
    }
}

impl MessageSink for RecordingOutput {
    fn say(&mut self, tone: Tone, text: &str) -> Result<(), BoundaryError> {
        self.messages.push((tone, text.to_string()));
        Ok(())
    }

    fn prompt(&mut self, tone: Tone, text: &str) -> Result<(), BoundaryError> {
        self.messages.push((tone, text.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_input_strips_line_endings() {
        let mut input = TerminalInput::new("12\r\n7\n".as_bytes());
        assert_eq!(input.read_line().unwrap(), "12");
        assert_eq!(input.read_line().unwrap(), "7");
        assert!(input.read_line().is_err());
    }

    #[test]
    fn terminal_input_tolerates_invalid_utf8() {
        let bytes: &[u8] = &[b'1', b'\n', 0xff, 0xfe, b'\n', b'2', b'5', b'\n'];
        let mut input = TerminalInput::new(bytes);
        assert_eq!(input.read_line().unwrap(), "1");
        let garbled = input.read_line().unwrap();
        assert!(garbled.contains('\u{fffd}'));
        assert_eq!(input.read_line().unwrap(), "25");
        assert!(input.read_line().is_err());
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let mut output = TerminalOutput::new(Vec::new(), false);
        output.say(Tone::Error, "boom").unwrap();
        output.prompt(Tone::Plain, "> ").unwrap();
        assert_eq!(String::from_utf8(output.writer).unwrap(), "boom\n> ");
    }

    #[test]
    fn colored_output_wraps_text() {
        let mut output = TerminalOutput::new(Vec::new(), true);
        output.say(Tone::Success, "win").unwrap();
        let written = String::from_utf8(output.writer).unwrap();
        assert!(written.contains("win"));
        assert!(written.contains('\u{1b}'));
    }
}
