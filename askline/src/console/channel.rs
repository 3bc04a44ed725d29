//! # Raw Line Channels
//!
//! This module defines the [`Channel`] trait, the pair of raw text
//! primitives every prompted reader is built on, together with the two
//! implementations shipped with the crate:
//!
//! - [`StdioChannel`]: the production channel over the process's
//!   stdin/stdout.
//! - [`ScriptedChannel`]: a deterministic channel fed from a queue of
//!   canned input lines, recording a transcript of everything written.
//!
//! ## Features
//! - Two-method contract: write text verbatim, read one line per prompt.
//! - Prompts are emitted by the channel itself, so prompt and read can
//!   never be reordered.
//! - Line terminators (`\n` or `\r\n`) are stripped before a line is
//!   returned.
//!
//! ## When to use
//! Implement [`Channel`] yourself when input comes from somewhere other
//! than a terminal (a socket session, an embedded REPL). Use
//! [`ScriptedChannel`] in tests or wherever a session must be replayed
//! without a human at the keyboard.
//!
//! ## Example
//! ```rust
//! use askline::console::{Channel, ScriptedChannel};
//!
//! let mut channel = ScriptedChannel::new(["hello"]);
//! let line = channel.read_str("Say something: ");
//!
//! assert_eq!(line, "hello");
//! assert_eq!(channel.transcript(), "Say something: ");
//! ```

use std::collections::VecDeque;
use std::io::{self, Write};

/// The two raw primitives an interactive session needs: emit text and
/// read one line of it back.
///
/// Both operations are infallible from the caller's point of view; an
/// implementation deals with its own transport errors internally (see
/// [`StdioChannel`]). `read_str` emits the prompt itself before blocking,
/// which is what guarantees prompts and answers interleave in order.
pub trait Channel {
    /// Emits `text` verbatim. No line terminator is appended.
    fn write_str(&mut self, text: &str);

    /// Emits `prompt`, then blocks until a full line of input is
    /// available and returns it without its terminator.
    fn read_str(&mut self, prompt: &str) -> String;
}

/// A [`Channel`] over the process's standard input and output.
///
/// Writes are flushed immediately so that prompts without a trailing
/// newline appear before the blocking read. A failed read is reported on
/// stderr and retried, the session never aborts on a transient read
/// error.
#[derive(Debug, Default)]
pub struct StdioChannel;

impl StdioChannel {
    pub fn new() -> Self {
        StdioChannel
    }
}

impl Channel for StdioChannel {
    fn write_str(&mut self, text: &str) {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }

    fn read_str(&mut self, prompt: &str) -> String {
        loop {
            self.write_str(prompt);
            let mut line = String::new();

            match io::stdin().read_line(&mut line) {
                Ok(_) => {
                    if line.ends_with('\n') {
                        line.pop();
                        if line.ends_with('\r') {
                            line.pop();
                        }
                    }
                    break line;
                }
                Err(_) => {
                    eprintln!("Couldn't read line..");
                    continue;
                }
            }
        }
    }
}

/// A [`Channel`] that replays a fixed script of input lines and records
/// everything written to it.
///
/// Each call to [`Channel::read_str`] appends the prompt to the
/// transcript and pops the next scripted line. Running the script dry is
/// a setup bug and panics with the offending prompt.
///
/// # Example
/// ```rust
/// use askline::console::{Channel, ScriptedChannel};
///
/// let mut channel = ScriptedChannel::new(["yes", "no"]);
/// assert_eq!(channel.read_str("First? "), "yes");
/// assert_eq!(channel.read_str("Second? "), "no");
/// assert_eq!(channel.transcript(), "First? Second? ");
/// ```
#[derive(Debug)]
pub struct ScriptedChannel {
    inputs: VecDeque<String>,
    transcript: String,
}

impl ScriptedChannel {
    /// Creates a channel that will answer successive reads with `inputs`,
    /// in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedChannel {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: String::new(),
        }
    }

    /// Everything written to the channel so far, prompts included, in
    /// write order.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Number of scripted lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Channel for ScriptedChannel {
    fn write_str(&mut self, text: &str) {
        self.transcript.push_str(text);
    }

    fn read_str(&mut self, prompt: &str) -> String {
        self.write_str(prompt);
        match self.inputs.pop_front() {
            Some(line) => line,
            None => panic!("input script ran dry at prompt {:?}", prompt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_channel_replays_in_order() {
        let mut channel = ScriptedChannel::new(["a", "b", "c"]);
        assert_eq!(channel.remaining(), 3);
        assert_eq!(channel.read_str("1: "), "a");
        assert_eq!(channel.read_str("2: "), "b");
        assert_eq!(channel.read_str("3: "), "c");
        assert_eq!(channel.remaining(), 0);
    }

    #[test]
    fn test_scripted_channel_transcript_interleaves_writes_and_prompts() {
        let mut channel = ScriptedChannel::new(["42"]);
        channel.write_str("header\n");
        channel.read_str("Enter: ");
        channel.write_str("footer\n");
        assert_eq!(channel.transcript(), "header\nEnter: footer\n");
    }

    #[test]
    #[should_panic(expected = "input script ran dry")]
    fn test_scripted_channel_panics_when_script_runs_dry() {
        let mut channel = ScriptedChannel::new(Vec::<String>::new());
        channel.read_str("Enter: ");
    }
}
