//! State functions.
//!
//! A grammar is a set of states. Each state does some navigation and
//! emission on the [`Lexer`] and then names the state to run next, or
//! returns `None` to stop the scan:
//!
//! ```
//! use runescan_lex::{Lexer, Next, State};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Kind { Word }
//!
//! fn lex_word(lx: &mut Lexer<Kind>) -> Next<Kind> {
//!     if lx.accept_while(|c| c.is_alphabetic()) > 0 {
//!         lx.emit(Kind::Word);
//!     }
//!     lx.skip_whitespace();
//!     if lx.is_end_of_input() {
//!         return None;
//!     }
//!     State::next(lex_word)
//! }
//! # let _ = State::new(lex_word);
//! ```

use super::core::Lexer;

/// The scanning capability: run one step and pick the next state.
///
/// Implemented for every `FnOnce(&mut Lexer<K, V>) -> Next<K, V>`, so plain
/// `fn` items and closures are states. Structs implement it directly when a
/// state needs to carry data from one step to the next.
pub trait Scan<K, V = String>: Send {
    /// Runs this state against `lexer`.
    fn scan(self: Box<Self>, lexer: &mut Lexer<K, V>) -> Next<K, V>;
}

impl<K, V, F> Scan<K, V> for F
where
    F: FnOnce(&mut Lexer<K, V>) -> Next<K, V> + Send,
{
    fn scan(self: Box<Self>, lexer: &mut Lexer<K, V>) -> Next<K, V> {
        (*self)(lexer)
    }
}

/// What a state returns: the next state, or `None` to end the scan.
pub type Next<K, V = String> = Option<State<K, V>>;

/// A boxed state, ready to be run by the driver.
pub struct State<K, V = String>(Box<dyn Scan<K, V>>);

impl<K, V> State<K, V> {
    /// Boxes a state.
    pub fn new<S>(state: S) -> Self
    where
        S: Scan<K, V> + 'static,
    {
        State(Box::new(state))
    }

    /// Boxes a closure as a state.
    ///
    /// Unlike [`State::new`], the closure's argument and return types are
    /// inferred, so no annotations are needed.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnOnce(&mut Lexer<K, V>) -> Next<K, V> + Send + 'static,
    {
        State(Box::new(f))
    }

    /// Shorthand for `Some(State::new(state))`, the usual tail of a state
    /// function.
    pub fn next<S>(state: S) -> Next<K, V>
    where
        S: Scan<K, V> + 'static,
    {
        Some(State::new(state))
    }

    /// Runs the state once.
    pub fn run(self, lexer: &mut Lexer<K, V>) -> Next<K, V> {
        self.0.scan(lexer)
    }
}

impl<K, V> Scan<K, V> for State<K, V> {
    fn scan(self: Box<Self>, lexer: &mut Lexer<K, V>) -> Next<K, V> {
        self.0.scan(lexer)
    }
}

impl<K, V> std::fmt::Debug for State<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("State(..)")
    }
}
