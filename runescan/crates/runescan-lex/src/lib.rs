//! runescan-lex - A State-Function Scanning Engine
//!
//! This crate turns an input string into a stream of typed tokens. It does
//! not know any grammar: the caller supplies the grammar as a set of state
//! functions, and the engine supplies the cursor, the emission protocol and
//! a driver thread that runs the states and feeds a bounded token channel.
//!
//! # Example Usage
//!
//! ```
//! use runescan_lex::{Engine, Lexer, Next, State, TokenKind};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Kind { Number }
//!
//! fn lex_start(lx: &mut Lexer<Kind>) -> Next<Kind> {
//!     lx.skip_whitespace();
//!     if lx.is_end_of_input() {
//!         return None;
//!     }
//!     if lx.is_number() {
//!         return State::next(lex_number);
//!     }
//!     let c = lx.advance();
//!     lx.error(format_args!("unexpected {:?}", c))
//! }
//!
//! fn lex_number(lx: &mut Lexer<Kind>) -> Next<Kind> {
//!     lx.accept_while(|c| c.is_numeric());
//!     lx.emit(Kind::Number);
//!     State::next(lex_start)
//! }
//!
//! let stream = Engine::new("numbers", "12 34", lex_start).run().unwrap();
//! let tokens: Vec<_> = stream.collect();
//!
//! assert_eq!(tokens[0].value(), "12");
//! assert_eq!(tokens[1].value(), "34");
//! assert_eq!(*tokens[2].kind(), TokenKind::EndOfInput);
//! assert_eq!(tokens.len(), 3);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - `Token` and `TokenKind`
//! - [`cursor`] - the scan window and rune-level navigation
//! - [`unicode`] - character classes
//! - [`lexer`] - the `Lexer` given to states, emission, and the driver
//!
//! # Threading
//!
//! [`Engine::run`] starts one driver thread per scan. The consumer reads
//! from a [`TokenStream`]; the driver blocks when the channel is full and
//! the consumer blocks when it is empty. Errors found by the grammar are
//! delivered as a single [`TokenKind::Error`] token, after which the stream
//! closes. Anything a state emits after its error is dropped.
//!
//! # Value Types
//!
//! Token values default to `String`. Any `V: From<String>` gets the short
//! forms `emit`, `error` and `skip_whitespace`. Other value types, such as a
//! grammar that parses numerals straight into `i64`, use
//! [`Lexer::emit_transformed`], [`Lexer::error_with`] and
//! [`Lexer::skip_whitespace_with`], which take the value explicitly.
//!
//! # Lookback
//!
//! The cursor remembers only the width of the last character read, so
//! exactly one `advance` can be undone with `backup`. Grammars that need
//! deeper lookahead should use `peek_n` or `remaining_text` instead.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod token;
pub mod unicode;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{tokenize, CancelToken, Engine, Lexer, Next, Scan, State, TokenStream};
pub use runescan_util::{ScanConfig, ScanError, ScanResult, Span};
pub use token::{Token, TokenKind};
