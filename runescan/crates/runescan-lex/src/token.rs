//! Token model.
//!
//! A token is a kind plus a value, stamped with the span of input it was
//! cut from. The engine reserves exactly two kinds, [`TokenKind::EndOfInput`]
//! and [`TokenKind::Error`]; every other kind is the grammar's own tag type
//! wrapped in [`TokenKind::Custom`].

use std::fmt;

use runescan_util::Span;

/// Category of a token.
///
/// `K` is the grammar's tag type. The engine never inspects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind<K> {
    /// Input exhausted. No token follows it.
    EndOfInput,
    /// Scan failed. The value carries the diagnostic; no token follows it.
    Error,
    /// A grammar-defined kind.
    Custom(K),
}

impl<K> TokenKind<K> {
    /// Returns true for [`TokenKind::EndOfInput`].
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, TokenKind::EndOfInput)
    }

    /// Returns true for [`TokenKind::Error`].
    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Error)
    }

    /// Returns true for the two reserved kinds.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TokenKind::Custom(_))
    }

    /// The grammar tag, if this is a custom kind.
    pub fn custom(&self) -> Option<&K> {
        match self {
            TokenKind::Custom(kind) => Some(kind),
            _ => None,
        }
    }
}

impl<K> From<K> for TokenKind<K> {
    fn from(kind: K) -> Self {
        TokenKind::Custom(kind)
    }
}

impl<K: fmt::Debug> fmt::Display for TokenKind<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::EndOfInput => f.write_str("EOF"),
            TokenKind::Error => f.write_str("ERROR"),
            TokenKind::Custom(kind) => write!(f, "{:?}", kind),
        }
    }
}

/// One lexical unit.
///
/// Tokens are immutable once built: the fields are private and there are no
/// setters.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<K, V = String> {
    kind: TokenKind<K>,
    value: V,
    span: Span,
}

impl<K, V> Token<K, V> {
    /// Creates a token.
    pub fn new(kind: TokenKind<K>, value: V, span: Span) -> Self {
        Self { kind, value, span }
    }

    /// The token's category.
    pub fn kind(&self) -> &TokenKind<K> {
        &self.kind
    }

    /// The token's payload.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Where in the input the token came from.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Splits the token into its parts.
    pub fn into_parts(self) -> (TokenKind<K>, V, Span) {
        (self.kind, self.value, self.span)
    }

    /// Returns true if this is the end-of-input token.
    pub fn is_end_of_input(&self) -> bool {
        self.kind.is_end_of_input()
    }

    /// Returns true if this is an error token.
    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }
}

impl<K: PartialEq, V> Token<K, V> {
    /// Returns true if the token has the given custom kind.
    pub fn is(&self, kind: &K) -> bool {
        self.kind.custom() == Some(kind)
    }
}

impl<K, V: fmt::Display> fmt::Display for Token<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => f.write_str("EOF"),
            _ => write!(f, "{}", self.value),
        }
    }
}
