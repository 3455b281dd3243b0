//! Core lexer implementation.
//!
//! This module contains the `Lexer` handed to state functions and its
//! navigation methods. Emission lives in `emit`, the thread that drives the
//! states lives in `driver`.

use std::sync::Arc;

use crossbeam::channel::Sender;

use crate::cursor::Cursor;
use crate::token::Token;

use super::cancel::CancelToken;

/// The producer side of a scan.
///
/// State functions receive a `&mut Lexer` and use it to move through the
/// input and publish tokens. It is owned by the driver thread for the whole
/// scan; the consumer never sees it. When the driver finishes, dropping the
/// lexer drops the only sender and closes the token stream.
///
/// Emission methods that invent a value (`emit`, `error`,
/// `skip_whitespace`) need `V: From<String>`; their `*_with` and
/// `emit_transformed` counterparts work for any `V`.
pub struct Lexer<K, V = String> {
    /// Diagnostic name of the scan.
    name: Arc<str>,

    /// Scan window over the input.
    pub(super) cursor: Cursor,

    /// Producer end of the output stream.
    pub(super) tokens: Sender<Token<K, V>>,

    /// Shared stop flag set by the consumer.
    cancel: CancelToken,

    /// Number of tokens delivered so far.
    pub(super) emitted: usize,

    /// Set once the consumer has dropped its end of the stream.
    pub(super) disconnected: bool,

    /// Set by the first error token; nothing is published after it.
    pub(super) errored: bool,
}

impl<K, V> Lexer<K, V> {
    /// Creates a lexer over `cursor` publishing into `tokens`.
    pub(crate) fn new(
        name: Arc<str>,
        cursor: Cursor,
        tokens: Sender<Token<K, V>>,
        cancel: CancelToken,
    ) -> Self {
        Self {
            name,
            cursor,
            tokens,
            cancel,
            emitted: 0,
            disconnected: false,
            errored: false,
        }
    }

    /// Reads the next character and moves past it; `None` at end of input.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        self.cursor.advance()
    }

    /// Steps back over the character read by the last `advance`.
    ///
    /// Single-slot lookback: a second `backup` without an `advance` in
    /// between does nothing.
    #[inline]
    pub fn backup(&mut self) {
        self.cursor.backup()
    }

    /// Returns the next character without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<char> {
        self.cursor.peek()
    }

    /// Returns up to `count` characters from the cursor, clamped at the end.
    pub fn peek_n(&self, count: usize) -> &str {
        self.cursor.peek_n(count)
    }

    /// Returns the character at the cursor without moving.
    #[inline]
    pub fn current_character(&self) -> Option<char> {
        self.cursor.current_character()
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        self.cursor.is_end_of_input()
    }

    /// Returns true if the character at the cursor is a newline.
    pub fn is_newline(&self) -> bool {
        self.cursor.is_newline()
    }

    /// Returns true if the character at the cursor is numeric.
    pub fn is_number(&self) -> bool {
        self.cursor.is_number()
    }

    /// Returns true if the character at the cursor is whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.cursor.is_whitespace()
    }

    /// Consumes the next character if it appears in `valid`.
    pub fn accept(&mut self, valid: &str) -> bool {
        self.cursor.accept(valid)
    }

    /// Consumes a run of characters from `valid`, returning how many.
    pub fn accept_run(&mut self, valid: &str) -> usize {
        self.cursor.accept_run(valid)
    }

    /// Consumes characters while `pred` holds, returning how many.
    pub fn accept_while(&mut self, pred: impl FnMut(char) -> bool) -> usize {
        self.cursor.accept_while(pred)
    }

    /// The text accumulated for the token in progress.
    pub fn pending_text(&self) -> &str {
        self.cursor.pending_text()
    }

    /// The text from the cursor to the end of input.
    pub fn remaining_text(&self) -> &str {
        self.cursor.remaining_text()
    }

    /// Read-only view of the cursor.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Byte offset where the pending token starts.
    pub fn start(&self) -> usize {
        self.cursor.start()
    }

    /// Byte offset of the next character to read.
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Byte length of the last character read, 0 if it cannot be undone.
    pub fn width(&self) -> usize {
        self.cursor.width()
    }

    /// 1-based line of the cursor.
    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    /// 1-based column of the cursor, in characters.
    pub fn column(&self) -> usize {
        self.cursor.column()
    }

    /// Diagnostic name of this scan.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full input.
    pub fn input(&self) -> &str {
        self.cursor.input()
    }

    /// Number of tokens delivered to the stream so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Returns true once an error token has ended the scan.
    pub fn has_errored(&self) -> bool {
        self.errored
    }

    /// Returns true if the consumer asked the scan to stop.
    ///
    /// The driver checks this between states; long-running states may
    /// check it themselves.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Whether the driver should stop before running another state.
    pub(super) fn should_stop(&self) -> bool {
        self.errored || self.disconnected || self.cancel.is_cancelled()
    }
}
