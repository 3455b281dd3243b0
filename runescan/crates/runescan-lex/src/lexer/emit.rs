//! Emission protocol.
//!
//! Turns the pending window into tokens and pushes them onto the output
//! stream. Every operation here ends with `start == pos`, except `error`,
//! which ends the scan instead.

use std::fmt;

use log::{debug, trace, warn};
use runescan_util::Span;

use crate::token::{Token, TokenKind};

use super::core::Lexer;
use super::state::Next;

impl<K, V> Lexer<K, V> {
    /// Emits the pending text as a token, with its value computed by
    /// `transform`.
    ///
    /// `transform` sees exactly the pending text. It should be pure; if it
    /// panics, the panic ends the driver like any other panicking state.
    ///
    /// # Example
    ///
    /// ```
    /// use runescan_lex::{tokenize, Lexer, Next};
    ///
    /// #[derive(Debug, Clone, Copy, PartialEq)]
    /// enum Kind { Int }
    ///
    /// fn lex_int(lx: &mut Lexer<Kind, i64>) -> Next<Kind, i64> {
    ///     lx.accept_while(|c| c.is_ascii_digit());
    ///     lx.emit_transformed(Kind::Int, |text| text.parse().unwrap_or(0));
    ///     None
    /// }
    ///
    /// let tokens = tokenize("ints", "1234", lex_int).unwrap();
    /// assert_eq!(*tokens[0].value(), 1234);
    /// ```
    pub fn emit_transformed<F>(&mut self, kind: impl Into<TokenKind<K>>, transform: F)
    where
        F: FnOnce(&str) -> V,
    {
        let (text, span) = self.cursor.take_pending();
        let value = transform(text);
        self.publish(Token::new(kind.into(), value, span));
    }

    /// Drops the pending text without emitting it.
    pub fn ignore(&mut self) {
        self.cursor.ignore();
    }

    /// Discards the pending text and emits an end-of-input token carrying
    /// `value`, with an empty span at the cursor.
    pub fn emit_end_of_input_with(&mut self, value: V) {
        self.ignore();
        let span = Span::empty_at(self.cursor.pos());
        self.publish(Token::new(TokenKind::EndOfInput, value, span));
    }

    /// Emits an error token and ends the scan, with the token's value built
    /// from the formatted message by `to_value`.
    ///
    /// This is the error path for value types that cannot be built from a
    /// `String`. Once an error token is out, every later emission is dropped
    /// and the driver stops before the next state, whether or not the caller
    /// returns the terminal signal.
    ///
    /// ```
    /// use runescan_lex::{tokenize, Lexer, Next, State};
    ///
    /// #[derive(Debug, Clone, Copy, PartialEq)]
    /// enum Kind { Int }
    ///
    /// fn lex_int(lx: &mut Lexer<Kind, i64>) -> Next<Kind, i64> {
    ///     lx.skip_whitespace_with(|| 0);
    ///     if lx.is_end_of_input() {
    ///         return None;
    ///     }
    ///     if lx.accept_while(|c| c.is_ascii_digit()) == 0 {
    ///         return lx.error_with("expected a digit", |_| -1);
    ///     }
    ///     lx.emit_transformed(Kind::Int, |text| text.parse().unwrap_or(i64::MAX));
    ///     State::next(lex_int)
    /// }
    ///
    /// let tokens = tokenize("ints", "12 x", lex_int).unwrap();
    /// assert_eq!(*tokens[0].value(), 12);
    /// assert!(tokens[1].is_error());
    /// assert_eq!(*tokens[1].value(), -1);
    /// assert_eq!(tokens.len(), 2);
    /// ```
    #[must_use = "an error ends the scan; return this from the state"]
    pub fn error_with<F>(&mut self, message: impl fmt::Display, to_value: F) -> Next<K, V>
    where
        F: FnOnce(String) -> V,
    {
        let message = message.to_string();
        let span = self.cursor.pending_span();
        debug!("{}: error at {}: {}", self.name(), span, message);
        self.publish(Token::new(TokenKind::Error, to_value(message), span));
        self.errored = true;
        None
    }

    /// Skips a run of whitespace.
    ///
    /// Leaves the cursor on the next non-whitespace character with the
    /// skipped text discarded. If the run reaches the end of input, emits
    /// the end-of-input token instead, with the value from `end_value`.
    pub fn skip_whitespace_with<F>(&mut self, end_value: F)
    where
        F: FnOnce() -> V,
    {
        if self.cursor.eat_whitespace() {
            self.emit_end_of_input_with(end_value());
        } else {
            self.cursor.ignore();
        }
    }

    /// Pushes a token onto the stream, blocking while the stream is full.
    ///
    /// Once the consumer has hung up, or an error token has been sent,
    /// tokens are dropped and the driver stops at the next transition.
    pub(super) fn publish(&mut self, token: Token<K, V>) {
        if self.disconnected {
            return;
        }
        if self.errored {
            warn!(
                "{}: dropping token at {} emitted after an error",
                self.name(),
                token.span()
            );
            return;
        }

        let span = token.span();
        match self.tokens.send(token) {
            Ok(()) => {
                self.emitted += 1;
                trace!("{}: token #{} at {}", self.name(), self.emitted, span);
            },
            Err(_) => {
                warn!(
                    "{}: consumer hung up after {} tokens, dropping the rest",
                    self.name(),
                    self.emitted
                );
                self.disconnected = true;
            },
        }
    }
}

/// Shorthands for string-backed values, where messages and empty
/// end-of-input values convert directly.
impl<K, V: From<String>> Lexer<K, V> {
    /// Emits the pending text as a token of `kind`.
    ///
    /// Accepts a grammar tag directly (`lx.emit(Kind::Number)`) or one of
    /// the reserved kinds (`lx.emit(TokenKind::EndOfInput)`).
    pub fn emit(&mut self, kind: impl Into<TokenKind<K>>) {
        self.emit_transformed(kind, |text| V::from(text.to_owned()));
    }

    /// Discards the pending text and emits an empty end-of-input token.
    pub fn emit_end_of_input(&mut self) {
        self.emit_end_of_input_with(V::from(String::new()));
    }

    /// Emits an error token carrying `message` and ends the scan.
    ///
    /// Returns the terminal signal so a state can `return lx.error(..)`.
    /// The token's span is the pending window at the time of the error.
    ///
    /// ```
    /// use runescan_lex::{tokenize, Lexer, Next};
    ///
    /// fn reject(lx: &mut Lexer<()>) -> Next<()> {
    ///     let c = lx.advance();
    ///     lx.error(format_args!("unexpected {:?}", c))
    /// }
    ///
    /// let tokens = tokenize("reject", "$", reject).unwrap();
    /// assert!(tokens[0].is_error());
    /// assert_eq!(tokens[0].value(), "unexpected Some('$')");
    /// ```
    #[must_use = "an error ends the scan; return this from the state"]
    pub fn error(&mut self, message: impl fmt::Display) -> Next<K, V> {
        self.error_with(message, |text| V::from(text))
    }

    /// Skips a run of whitespace, emitting an empty end-of-input token if
    /// the run reaches the end.
    pub fn skip_whitespace(&mut self) {
        self.skip_whitespace_with(|| V::from(String::new()));
    }
}
