//! Character cursor for traversing scan input.
//!
//! This module provides the `Cursor` struct which maintains the scan window
//! (`start..pos`) over the input. It decodes UTF-8 one code point at a time,
//! so every offset it hands out sits on a character boundary.

use std::sync::Arc;

use runescan_util::Span;

use crate::unicode;

/// A cursor over the scan input.
///
/// `input[start..pos]` is the pending text of the token being accumulated.
/// `width` is the byte length of the last character read by [`advance`],
/// which is what [`backup`] rewinds by.
///
/// Lookback is a single slot: `backup` consumes the recorded width, so only
/// the most recent `advance` can be undone.
///
/// # Example
///
/// ```
/// use runescan_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x");
/// assert_eq!(cursor.advance(), Some('l'));
/// assert_eq!(cursor.advance(), Some('e'));
/// cursor.backup();
/// assert_eq!(cursor.pending_text(), "l");
/// ```
///
/// [`advance`]: Cursor::advance
/// [`backup`]: Cursor::backup
#[derive(Clone, Debug)]
pub struct Cursor {
    /// The input being scanned.
    input: Arc<str>,

    /// Byte offset where the pending token starts.
    start: usize,

    /// Byte offset of the next character to read.
    pos: usize,

    /// Byte length of the last character read, 0 if none.
    width: usize,
}

impl Cursor {
    /// Creates a cursor positioned at the start of `input`.
    pub fn new(input: impl Into<Arc<str>>) -> Self {
        Self {
            input: input.into(),
            start: 0,
            pos: 0,
            width: 0,
        }
    }

    /// Reads the next character and moves past it.
    ///
    /// Returns `None` once the input is exhausted; on that path the recorded
    /// width is 0, so a following `backup` does nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use runescan_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("é!");
    /// assert_eq!(cursor.advance(), Some('é'));
    /// assert_eq!(cursor.pos(), 2);
    /// assert_eq!(cursor.advance(), Some('!'));
    /// assert_eq!(cursor.advance(), None);
    /// ```
    pub fn advance(&mut self) -> Option<char> {
        match self.current_character() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                self.check_invariants();
                Some(c)
            },
            None => {
                self.width = 0;
                None
            },
        }
    }

    /// Steps back over the character read by the last `advance`.
    ///
    /// Only the most recent read can be undone. Calling `backup` twice in a
    /// row, or before any read, leaves the position unchanged.
    pub fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
        self.check_invariants();
    }

    /// Returns the next character without consuming it.
    ///
    /// # Example
    ///
    /// ```
    /// use runescan_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek(), Some('a'));
    /// assert_eq!(cursor.peek(), Some('a'));
    /// assert_eq!(cursor.pos(), 0);
    /// ```
    pub fn peek(&mut self) -> Option<char> {
        let c = self.advance();
        self.backup();
        c
    }

    /// Returns up to `count` characters starting at the cursor.
    ///
    /// Clamps at the end of input and never splits a character.
    ///
    /// # Example
    ///
    /// ```
    /// use runescan_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("añb");
    /// assert_eq!(cursor.peek_n(2), "añ");
    /// assert_eq!(cursor.peek_n(10), "añb");
    /// ```
    pub fn peek_n(&self, count: usize) -> &str {
        let rest = self.remaining_text();
        let end = rest
            .char_indices()
            .nth(count)
            .map_or(rest.len(), |(offset, _)| offset);
        &rest[..end]
    }

    /// Returns the character at the cursor without moving.
    ///
    /// Decodes a full code point, exactly like `advance`.
    pub fn current_character(&self) -> Option<char> {
        self.remaining_text().chars().next()
    }

    /// Returns true once every character has been consumed.
    pub fn is_end_of_input(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Returns true if the character at the cursor is `'\n'`.
    pub fn is_newline(&self) -> bool {
        self.current_character().map_or(false, unicode::is_newline)
    }

    /// Returns true if the character at the cursor is numeric.
    ///
    /// Uses the Unicode numeric categories, so `'٣'` and `'½'` count.
    pub fn is_number(&self) -> bool {
        self.current_character().map_or(false, unicode::is_number)
    }

    /// Returns true if the character at the cursor is Unicode whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.current_character().map_or(false, unicode::is_whitespace)
    }

    /// Consumes the next character if it appears in `valid`.
    ///
    /// # Example
    ///
    /// ```
    /// use runescan_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("+1");
    /// assert!(cursor.accept("+-"));
    /// assert!(!cursor.accept("+-"));
    /// assert_eq!(cursor.pending_text(), "+");
    /// ```
    pub fn accept(&mut self, valid: &str) -> bool {
        self.accept_if(|c| valid.contains(c))
    }

    /// Consumes a run of characters from `valid`, returning how many.
    pub fn accept_run(&mut self, valid: &str) -> usize {
        self.accept_while(|c| valid.contains(c))
    }

    /// Consumes characters while `pred` holds, returning how many.
    ///
    /// # Example
    ///
    /// ```
    /// use runescan_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// assert_eq!(cursor.accept_while(|c| c.is_ascii_digit()), 3);
    /// assert_eq!(cursor.remaining_text(), "abc");
    /// ```
    pub fn accept_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while self.accept_if(&mut pred) {
            count += 1;
        }
        count
    }

    fn accept_if(&mut self, pred: impl FnOnce(char) -> bool) -> bool {
        let accepted = self.advance().map_or(false, pred);
        if !accepted {
            self.backup();
        }
        accepted
    }

    /// Advances over a run of whitespace, stopping in front of the first
    /// non-whitespace character.
    ///
    /// Returns true if the run reached the end of input. The pending window
    /// is not touched; callers decide whether to discard it.
    pub fn eat_whitespace(&mut self) -> bool {
        loop {
            match self.advance() {
                Some(c) if unicode::is_whitespace(c) => continue,
                Some(_) => {
                    self.backup();
                    return false;
                },
                None => return true,
            }
        }
    }

    /// Returns the pending text, `input[start..pos]`.
    pub fn pending_text(&self) -> &str {
        &self.input[self.start..self.pos]
    }

    /// Returns the text from the cursor to the end of input.
    pub fn remaining_text(&self) -> &str {
        &self.input[self.pos..]
    }

    /// Span of the pending text.
    pub fn pending_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Drops the pending text by moving `start` up to `pos`.
    ///
    /// Also clears the lookback slot: `backup` never crosses `start`.
    pub fn ignore(&mut self) {
        self.start = self.pos;
        self.width = 0;
    }

    /// Takes the pending text and its span, then starts a new window.
    pub(crate) fn take_pending(&mut self) -> (&str, Span) {
        let span = self.pending_span();
        self.ignore();
        (&self.input[span.start..span.end], span)
    }

    /// Byte offset where the pending token starts.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the next character to read.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Byte length of the last character read, 0 if it cannot be undone.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The full input.
    pub fn input(&self) -> &Arc<str> {
        &self.input
    }

    /// 1-based line number of the cursor.
    ///
    /// Computed on demand; meant for diagnostics, not hot loops.
    pub fn line(&self) -> usize {
        self.input[..self.pos].matches('\n').count() + 1
    }

    /// 1-based column of the cursor, counted in characters.
    pub fn column(&self) -> usize {
        let consumed = &self.input[..self.pos];
        let line_start = consumed.rfind('\n').map_or(0, |i| i + 1);
        consumed[line_start..].chars().count() + 1
    }

    #[inline]
    fn check_invariants(&self) {
        debug_assert!(
            self.start <= self.pos && self.pos <= self.input.len(),
            "cursor window out of order: start {} pos {} len {}",
            self.start,
            self.pos,
            self.input.len()
        );
        debug_assert!(self.input.is_char_boundary(self.pos));
    }
}
