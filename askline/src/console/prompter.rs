//! # Prompted Reader
//!
//! This module provides [`Prompter`], a typed, validating front end over a
//! raw [`Channel`]. It repeatedly prompts until the input parses and
//! satisfies every stated constraint, so a typed read never hands back an
//! invalid value.
//!
//! The retry loop lives in one place, [`Prompter::read_object`]; every
//! typed reader is a thin specialization of it supplying a mapper.
//!
//! ## Features
//! - Typed readers for integers, wide integers, floats, booleans and
//!   ISO-8601 dates.
//! - Range, option-set and predicate validation with re-prompt on failure.
//! - Caller-supplied mappers for arbitrary target types.
//! - Deterministic output ordering: prompt, then one error line per failed
//!   attempt, then prompt again.
//!
//! ## Usage
//!
//! Build a [`Prompter`] over the channel that owns your session. With a
//! terminal that is [`StdioChannel`]:
//!
//! ```rust,no_run
//! use askline::console::{Prompter, StdioChannel};
//!
//! let mut io = Prompter::new(StdioChannel::new());
//! let age = io.read_int("How old are you? ", "Not an age");
//! io.write_line(age);
//! ```
//!
//! In tests, or anywhere a session must be replayed, use a scripted
//! channel instead:
//!
//! ```rust
//! use askline::console::{Prompter, ScriptedChannel};
//!
//! let mut io = Prompter::new(ScriptedChannel::new(["abc", "42"]));
//! let n = io.read_int("Enter a number: ", "Error");
//!
//! assert_eq!(n, 42);
//! assert_eq!(
//!     io.channel().transcript(),
//!     "Enter a number: Error: the value is not a valid integer\nEnter a number: ",
//! );
//! ```
//!
//! [`StdioChannel`]: crate::console::StdioChannel

use std::error::Error;
use std::fmt::Display;

use chrono::NaiveDate;

use crate::console::channel::Channel;

/// The numeric width a reader expected its input to parse as.
///
/// Used by [`InputError::Number`] to produce a precise message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Int,
    Long,
    Double,
}

impl Display for NumberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int => write!(f, "integer"),
            Self::Long => write!(f, "long integer"),
            Self::Double => write!(f, "number"),
        }
    }
}

/// Why a single read attempt was rejected.
///
/// Parse failures and constraint violations are both represented here;
/// inside [`Prompter::read_object`] either kind is reported to the output
/// channel and retried, never surfaced to the caller.
///
/// - [`Number`], [`Bool`], [`Date`]: the raw text could not be parsed as
///   the expected type.
/// - [`OutOfRange`], [`DateOutOfRange`], [`NotAnOption`], [`Rejected`]:
///   the text parsed, but failed a semantic check.
/// - [`Other`]: a caller-supplied mapper rejected the input with its own
///   message.
///
/// [`Number`]: InputError::Number
/// [`Bool`]: InputError::Bool
/// [`Date`]: InputError::Date
/// [`OutOfRange`]: InputError::OutOfRange
/// [`DateOutOfRange`]: InputError::DateOutOfRange
/// [`NotAnOption`]: InputError::NotAnOption
/// [`Rejected`]: InputError::Rejected
/// [`Other`]: InputError::Other
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    Number(NumberKind),
    Bool,
    Date,
    OutOfRange(f64, f64),
    DateOutOfRange(NaiveDate, NaiveDate),
    NotAnOption(Vec<String>),
    Rejected,
    Other(String),
}

impl Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(kind) => write!(f, "the value is not a valid {}", kind),
            Self::Bool => write!(f, "the value is not true or false"),
            Self::Date => write!(f, "the value is not a date in YYYY-MM-DD form"),
            Self::OutOfRange(min, max) => {
                write!(f, "the value is not between {} and {}", min, max)
            }
            Self::DateOutOfRange(from, to) => {
                write!(f, "the date is not strictly between {} and {}", from, to)
            }
            Self::NotAnOption(options) => {
                write!(f, "the value is not one of the options: {}", options.join(", "))
            }
            Self::Rejected => write!(f, "the value does not satisfy the required condition"),
            Self::Other(message) => write!(f, "{}", message),
        }
    }
}

impl Error for InputError {}

impl From<String> for InputError {
    fn from(message: String) -> Self {
        InputError::Other(message)
    }
}

impl From<&str> for InputError {
    fn from(message: &str) -> Self {
        InputError::Other(message.to_string())
    }
}

/// A typed, validating reader over a raw [`Channel`].
///
/// The channel is taken by value; the prompter owns the session for its
/// whole lifetime (use [`Prompter::into_channel`] to get it back, e.g. to
/// inspect a scripted transcript).
///
/// Every `read_*` method blocks until a valid value is obtained. There is
/// no retry cap and no timeout: an interactive session assumes a human
/// eventually supplies correct input.
///
/// # Example
/// ```rust
/// use askline::console::{Prompter, ScriptedChannel};
///
/// let mut io = Prompter::new(ScriptedChannel::new(["maybe", "yes"]));
/// let answer = io.read_string_options(
///     "Continue? (yes/no) ",
///     "Answer",
///     &[String::from("yes"), String::from("no")],
/// );
///
/// assert_eq!(answer, "yes");
/// ```
pub struct Prompter<C: Channel> {
    channel: C,
}

impl<C: Channel> Prompter<C> {
    pub fn new(channel: C) -> Self {
        Prompter { channel }
    }

    /// Shared access to the underlying channel.
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Consumes the prompter, returning the channel.
    pub fn into_channel(self) -> C {
        self.channel
    }

    /// The core retry loop every typed reader is built on.
    ///
    /// Emits `prompt`, reads one line, applies `mapper`. On success the
    /// produced value is returned immediately. On failure one line of the
    /// form `error_prompt: message` is written and the whole cycle
    /// repeats. Prompts and error lines appear strictly in the order the
    /// attempts happen.
    ///
    /// # Example
    /// ```rust
    /// use askline::console::{InputError, Prompter, ScriptedChannel};
    ///
    /// let mut io = Prompter::new(ScriptedChannel::new(["purple", "red"]));
    /// let color = io.read_object("Pick red or blue: ", "Bad color", |raw| {
    ///     match raw {
    ///         "red" | "blue" => Ok(raw.to_string()),
    ///         _ => Err(InputError::from("no such color")),
    ///     }
    /// });
    ///
    /// assert_eq!(color, "red");
    /// ```
    pub fn read_object<T, F>(&mut self, prompt: &str, error_prompt: &str, mut mapper: F) -> T
    where
        F: FnMut(&str) -> Result<T, InputError>,
    {
        loop {
            let raw = self.channel.read_str(prompt);
            match mapper(&raw) {
                Ok(value) => break value,
                Err(e) => self.write_line(format!("{}: {}", error_prompt, e)),
            }
        }
    }

    /// Reads a base-10 signed integer.
    pub fn read_int(&mut self, prompt: &str, error_prompt: &str) -> i32 {
        self.read_object(prompt, error_prompt, |raw| {
            raw.trim()
                .parse()
                .map_err(|_| InputError::Number(NumberKind::Int))
        })
    }

    /// Reads a base-10 signed wide integer.
    pub fn read_long(&mut self, prompt: &str, error_prompt: &str) -> i64 {
        self.read_object(prompt, error_prompt, |raw| {
            raw.trim()
                .parse()
                .map_err(|_| InputError::Number(NumberKind::Long))
        })
    }

    /// Reads a floating-point number.
    pub fn read_double(&mut self, prompt: &str, error_prompt: &str) -> f64 {
        self.read_object(prompt, error_prompt, |raw| {
            raw.trim()
                .parse()
                .map_err(|_| InputError::Number(NumberKind::Double))
        })
    }

    /// Reads `true` or `false`.
    pub fn read_bool(&mut self, prompt: &str, error_prompt: &str) -> bool {
        self.read_object(prompt, error_prompt, |raw| {
            raw.trim().parse().map_err(|_| InputError::Bool)
        })
    }

    /// Reads a number within `[min, max]`. Both bounds are inclusive.
    pub fn read_number_range(
        &mut self,
        prompt: &str,
        error_prompt: &str,
        min: f64,
        max: f64,
    ) -> f64 {
        self.read_object(prompt, error_prompt, |raw| {
            let value: f64 = raw
                .trim()
                .parse()
                .map_err(|_| InputError::Number(NumberKind::Double))?;
            if value >= min && value <= max {
                Ok(value)
            } else {
                Err(InputError::OutOfRange(min, max))
            }
        })
    }

    /// Reads one raw line, no validation. The line is returned exactly as
    /// the channel produced it.
    pub fn read_string(&mut self, prompt: &str) -> String {
        self.channel.read_str(prompt)
    }

    /// Reads a line accepted by `predicate`, unchanged.
    pub fn read_string_predicate<P>(
        &mut self,
        prompt: &str,
        error_prompt: &str,
        predicate: P,
    ) -> String
    where
        P: Fn(&str) -> bool,
    {
        self.read_object(prompt, error_prompt, |raw| {
            if predicate(raw) {
                Ok(raw.to_string())
            } else {
                Err(InputError::Rejected)
            }
        })
    }

    /// Reads a line that is one of `options`, unchanged.
    pub fn read_string_options(
        &mut self,
        prompt: &str,
        error_prompt: &str,
        options: &[String],
    ) -> String {
        self.read_object(prompt, error_prompt, |raw| {
            if options.iter().any(|option| option.as_str() == raw) {
                Ok(raw.to_string())
            } else {
                Err(InputError::NotAnOption(options.to_vec()))
            }
        })
    }

    /// Reads a calendar date in ISO-8601 form (`YYYY-MM-DD`).
    pub fn read_iso_date(&mut self, prompt: &str, error_prompt: &str) -> NaiveDate {
        self.read_object(prompt, error_prompt, |raw| {
            raw.trim().parse().map_err(|_| InputError::Date)
        })
    }

    /// Reads an ISO-8601 date strictly between `from` and `to`. Both
    /// bounds are exclusive, unlike [`Prompter::read_number_range`]; the
    /// bounds themselves are rejected.
    pub fn read_iso_date_range(
        &mut self,
        prompt: &str,
        error_prompt: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> NaiveDate {
        self.read_object(prompt, error_prompt, |raw| {
            let date: NaiveDate = raw.trim().parse().map_err(|_| InputError::Date)?;
            if date > from && date < to {
                Ok(date)
            } else {
                Err(InputError::DateOutOfRange(from, to))
            }
        })
    }

    /// Emits `text` verbatim, no terminator appended.
    pub fn write_string(&mut self, text: &str) {
        self.channel.write_str(text);
    }

    /// Emits the textual representation of `value` followed by `\n`.
    /// `write_line(42)` produces exactly `"42\n"`.
    pub fn write_line<V: Display>(&mut self, value: V) {
        self.channel.write_str(&format!("{}\n", value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::channel::ScriptedChannel;

    fn prompter(inputs: &[&str]) -> Prompter<ScriptedChannel> {
        Prompter::new(ScriptedChannel::new(inputs.iter().copied()))
    }

    #[test]
    fn test_read_int_valid_input_returns_without_error_line() {
        let mut io = prompter(&["42"]);
        assert_eq!(io.read_int("Enter a number: ", "Error"), 42);
        assert_eq!(io.channel().transcript(), "Enter a number: ");
    }

    #[test]
    fn test_read_int_retries_after_malformed_input() {
        let mut io = prompter(&["abc", "42"]);
        assert_eq!(io.read_int("Enter a number: ", "Error"), 42);
        assert_eq!(
            io.channel().transcript(),
            "Enter a number: Error: the value is not a valid integer\nEnter a number: ",
        );
    }

    #[test]
    fn test_read_int_trims_surrounding_whitespace() {
        let mut io = prompter(&["  -7  "]);
        assert_eq!(io.read_int("n: ", "Error"), -7);
    }

    #[test]
    fn test_read_long_wide_values_and_retry() {
        let mut io = prompter(&["9223372036854775808", "9223372036854775807"]);
        assert_eq!(io.read_long("n: ", "Error"), i64::MAX);
        assert_eq!(
            io.channel().transcript(),
            "n: Error: the value is not a valid long integer\nn: ",
        );
    }

    #[test]
    fn test_read_double_parses_and_retries() {
        let mut io = prompter(&["one and a half", "1.5"]);
        assert_eq!(io.read_double("x: ", "Error"), 1.5);
        assert_eq!(
            io.channel().transcript(),
            "x: Error: the value is not a valid number\nx: ",
        );
    }

    #[test]
    fn test_read_bool_retries_until_literal() {
        let mut io = prompter(&["yep", "true"]);
        assert!(io.read_bool("b: ", "Error"));
        assert_eq!(
            io.channel().transcript(),
            "b: Error: the value is not true or false\nb: ",
        );
    }

    #[test]
    fn test_read_number_range_bounds_are_inclusive() {
        let mut io = prompter(&["1"]);
        assert_eq!(io.read_number_range("n: ", "Error", 1.0, 10.0), 1.0);

        let mut io = prompter(&["10"]);
        assert_eq!(io.read_number_range("n: ", "Error", 1.0, 10.0), 10.0);
    }

    #[test]
    fn test_read_number_range_rejects_values_outside_bounds() {
        let mut io = prompter(&["0", "11", "5"]);
        assert_eq!(io.read_number_range("n: ", "Error", 1.0, 10.0), 5.0);
        assert_eq!(
            io.channel().transcript(),
            "n: Error: the value is not between 1 and 10\n\
             n: Error: the value is not between 1 and 10\n\
             n: ",
        );
    }

    #[test]
    fn test_read_number_range_reports_parse_failure_distinctly() {
        let mut io = prompter(&["ten", "10"]);
        assert_eq!(io.read_number_range("n: ", "Error", 1.0, 10.0), 10.0);
        assert_eq!(
            io.channel().transcript(),
            "n: Error: the value is not a valid number\nn: ",
        );
    }

    #[test]
    fn test_read_string_returns_raw_line_unchanged() {
        let mut io = prompter(&["  spaced  out  "]);
        assert_eq!(io.read_string("s: "), "  spaced  out  ");
        assert_eq!(io.channel().transcript(), "s: ");
    }

    #[test]
    fn test_read_string_predicate_retries_until_accepted() {
        let mut io = prompter(&["", "ada"]);
        let name = io.read_string_predicate("Name: ", "Error", |s| !s.is_empty());
        assert_eq!(name, "ada");
        assert_eq!(
            io.channel().transcript(),
            "Name: Error: the value does not satisfy the required condition\nName: ",
        );
    }

    #[test]
    fn test_read_string_options_accepts_member() {
        let options = vec![String::from("yes"), String::from("no")];
        let mut io = prompter(&["yes"]);
        assert_eq!(io.read_string_options("ok? ", "Error", &options), "yes");
        assert_eq!(io.channel().transcript(), "ok? ");
    }

    #[test]
    fn test_read_string_options_retries_on_non_member() {
        let options = vec![String::from("yes"), String::from("no")];
        let mut io = prompter(&["maybe", "no"]);
        assert_eq!(io.read_string_options("ok? ", "Error", &options), "no");
        assert_eq!(
            io.channel().transcript(),
            "ok? Error: the value is not one of the options: yes, no\nok? ",
        );
    }

    #[test]
    fn test_read_iso_date_parses_and_retries() {
        let mut io = prompter(&["15/01/2020", "2020-01-15"]);
        let date = io.read_iso_date("d: ", "Error");
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 15).unwrap());
        assert_eq!(
            io.channel().transcript(),
            "d: Error: the value is not a date in YYYY-MM-DD form\nd: ",
        );
    }

    #[test]
    fn test_read_iso_date_range_bounds_are_exclusive() {
        let from = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();

        let mut io = prompter(&["2020-01-01", "2020-01-31", "2020-01-15"]);
        let date = io.read_iso_date_range("d: ", "Error", from, to);
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 15).unwrap());
        assert_eq!(
            io.channel().transcript(),
            "d: Error: the date is not strictly between 2020-01-01 and 2020-01-31\n\
             d: Error: the date is not strictly between 2020-01-01 and 2020-01-31\n\
             d: ",
        );
    }

    #[test]
    fn test_read_object_custom_mapper_message() {
        let mut io = prompter(&["purple", "red"]);
        let color = io.read_object("c: ", "Bad color", |raw| match raw {
            "red" | "blue" => Ok(raw.to_string()),
            _ => Err(InputError::from("no such color")),
        });
        assert_eq!(color, "red");
        assert_eq!(io.channel().transcript(), "c: Bad color: no such color\nc: ");
    }

    #[test]
    fn test_write_line_appends_exactly_one_terminator() {
        let mut io = prompter(&[]);
        io.write_line(42);
        assert_eq!(io.channel().transcript(), "42\n");
    }

    #[test]
    fn test_write_string_is_verbatim() {
        let mut io = prompter(&[]);
        io.write_string("no newline");
        assert_eq!(io.channel().transcript(), "no newline");
    }

    #[test]
    fn test_identical_scripts_give_identical_results_and_transcripts() {
        let run = || {
            let mut io = prompter(&["0", "7"]);
            let value = io.read_number_range("n: ", "Error", 1.0, 10.0);
            (value, io.into_channel().transcript().to_string())
        };

        let (first_value, first_transcript) = run();
        let (second_value, second_transcript) = run();
        assert_eq!(first_value, second_value);
        assert_eq!(first_transcript, second_transcript);
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(
            format!("{}", InputError::Number(NumberKind::Int)),
            "the value is not a valid integer",
        );
        assert_eq!(
            format!("{}", InputError::OutOfRange(1.0, 10.0)),
            "the value is not between 1 and 10",
        );
        assert_eq!(
            format!("{}", InputError::NotAnOption(vec!["a".into(), "b".into()])),
            "the value is not one of the options: a, b",
        );
        assert_eq!(
            format!("{}", InputError::Other("boom".into())),
            "boom",
        );
    }
}
