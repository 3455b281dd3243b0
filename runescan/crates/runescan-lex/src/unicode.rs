//! Character classes for state functions.
//!
//! The cursor's `is_*` predicates go through these, and grammars can use
//! them directly with `accept_while`. Everything here follows the Unicode
//! categories exposed by `char`, not ASCII-only tests.

/// Checks if a character is a line feed.
///
/// # Example
///
/// ```
/// use runescan_lex::unicode::is_newline;
///
/// assert!(is_newline('\n'));
/// assert!(!is_newline('\r'));
/// ```
#[inline]
pub fn is_newline(c: char) -> bool {
    c == '\n'
}

/// Checks if a character is numeric (Unicode `Nd`, `Nl`, `No`).
///
/// # Example
///
/// ```
/// use runescan_lex::unicode::is_number;
///
/// assert!(is_number('7'));
/// assert!(is_number('٣'));  // Arabic-Indic three
/// assert!(is_number('½'));
/// assert!(!is_number('x'));
/// ```
#[inline]
pub fn is_number(c: char) -> bool {
    c.is_numeric()
}

/// Checks if a character is Unicode whitespace.
///
/// # Example
///
/// ```
/// use runescan_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\u{3000}'));  // ideographic space
/// assert!(!is_whitespace('_'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Checks if a character can start an identifier.
///
/// Underscore or any Unicode alphabetic character.
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character can continue an identifier.
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}
