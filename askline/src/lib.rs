//! # Askline
//!
//! A small Rust library for interactive console input with typed parsing,
//! validation and retry-on-error prompting.
//!
//! ## Features
//!
//! - **Typed readers** - integers, wide integers, floats, booleans and
//!   ISO-8601 calendar dates, each re-prompting until the input parses
//! - **Validated readers** - numeric ranges, option sets and arbitrary
//!   predicates, re-prompting on constraint violations too
//! - **One retry loop** - every reader is a specialization of a single
//!   core primitive taking a caller-supplied mapper
//! - **Pluggable channels** - the raw read/write primitives live behind a
//!   two-method trait; a stdio channel and a scripted replay channel ship
//!   with the crate
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! askline = "0.1"
//! ```
//!
//! ## Usage Examples
//!
//! ### Typed input with retry
//!
//! ```rust,no_run
//! use askline::console::{Prompter, StdioChannel};
//!
//! let mut io = Prompter::new(StdioChannel::new());
//!
//! // Loops until the user types a well-formed integer.
//! let guests = io.read_int("How many guests? ", "Guest count");
//!
//! // Both bounds inclusive.
//! let rating = io.read_number_range("Rate 1-10: ", "Rating", 1.0, 10.0);
//!
//! io.write_line(format!("{} guests, rated {}", guests, rating));
//! ```
//!
//! ### Option sets and predicates
//!
//! ```rust,no_run
//! use askline::console::{Prompter, StdioChannel};
//!
//! let mut io = Prompter::new(StdioChannel::new());
//!
//! let answer = io.read_string_options(
//!     "Continue? (yes/no) ",
//!     "Answer",
//!     &[String::from("yes"), String::from("no")],
//! );
//!
//! let name = io.read_string_predicate("Name: ", "Name", |s| !s.trim().is_empty());
//! io.write_line(format!("{}: {}", name, answer));
//! ```
//!
//! ### Custom mappers
//!
//! Any `(text) -> Result<T, InputError>` function can drive the core
//! retry primitive directly:
//!
//! ```rust
//! use askline::console::{InputError, Prompter, ScriptedChannel};
//!
//! let mut io = Prompter::new(ScriptedChannel::new(["8080"]));
//! let port = io.read_object("Port: ", "Bad port", |raw| {
//!     raw.trim()
//!         .parse::<u16>()
//!         .map_err(|_| InputError::from("not a port number"))
//! });
//!
//! assert_eq!(port, 8080);
//! ```
//!
//! ### Scripted sessions
//!
//! [`console::ScriptedChannel`] replays canned input and records a full
//! transcript, which is how this crate tests itself:
//!
//! ```rust
//! use askline::console::{Prompter, ScriptedChannel};
//!
//! let mut io = Prompter::new(ScriptedChannel::new(["abc", "42"]));
//! assert_eq!(io.read_int("n: ", "Error"), 42);
//! assert_eq!(
//!     io.channel().transcript(),
//!     "n: Error: the value is not a valid integer\nn: ",
//! );
//! ```
//!
//! ## Architecture
//!
//! - **`console::channel`** - the [`console::Channel`] trait plus the
//!   stdio and scripted implementations
//! - **`console::prompter`** - the [`console::Prompter`] retry loop, the
//!   derived typed readers and the [`console::InputError`] type
//!
//! ## Design Principles
//!
//! - **Never return garbage** - a typed read either returns a value
//!   satisfying every stated constraint or keeps prompting
//! - **Synchronous and single-threaded** - each read blocks its caller;
//!   the channel is exclusively owned for the whole session
//! - **Deterministic transcripts** - prompts and error lines are written
//!   strictly in the order attempts happen, so sessions replay exactly
//!
//! ## Error Handling
//!
//! Failed attempts never escape the retry loop; they are reported on the
//! output channel as `error_prompt: message` and retried. The message
//! comes from [`console::InputError`], which distinguishes parse failures
//! from constraint violations:
//!
//! ```rust
//! use askline::console::{InputError, NumberKind};
//!
//! assert_eq!(
//!     format!("{}", InputError::Number(NumberKind::Int)),
//!     "the value is not a valid integer",
//! );
//! assert_eq!(
//!     format!("{}", InputError::OutOfRange(1.0, 10.0)),
//!     "the value is not between 1 and 10",
//! );
//! ```
//!
//! ## License
//!
//! This project is licensed under the MIT License.

pub mod console;
