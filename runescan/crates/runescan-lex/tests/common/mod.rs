//! Test grammars shared by the integration tests.
//!
//! `calc` is a small expression grammar: numbers, identifiers, operators,
//! parentheses and `#` comments. `runs` splits input into alternating
//! whitespace and non-whitespace runs and emits both, so every byte of the
//! input ends up in some token.

#![allow(dead_code)]

use runescan_lex::unicode::{is_ident_continue, is_ident_start};
use runescan_lex::{tokenize, Lexer, Next, State, Token, TokenKind};

/// Token kinds of the test grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Number,
    Ident,
    Op,
    LParen,
    RParen,
    Space,
    Word,
}

/// Typed values produced by `calc_values`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

// ============================================================================
// CALC GRAMMAR
// ============================================================================

pub fn calc_start(lx: &mut Lexer<Kind>) -> Next<Kind> {
    lx.skip_whitespace();
    let c = match lx.peek() {
        // skip_whitespace already emitted EndOfInput
        None => return None,
        Some(c) => c,
    };

    if c.is_numeric() {
        return State::next(calc_number);
    }
    if is_ident_start(c) {
        return State::next(calc_ident);
    }

    lx.advance();
    match c {
        '#' => State::next(calc_comment),
        '(' => {
            lx.emit(Kind::LParen);
            State::next(calc_start)
        },
        ')' => {
            lx.emit(Kind::RParen);
            State::next(calc_start)
        },
        '+' | '-' | '*' | '/' | '=' => {
            lx.emit(Kind::Op);
            State::next(calc_start)
        },
        other => lx.error(format!("unexpected '{}'", other)),
    }
}

fn calc_number(lx: &mut Lexer<Kind>) -> Next<Kind> {
    lx.accept_while(|c| c.is_numeric());
    lx.emit(Kind::Number);
    State::next(calc_start)
}

fn calc_ident(lx: &mut Lexer<Kind>) -> Next<Kind> {
    lx.accept_while(is_ident_continue);
    lx.emit(Kind::Ident);
    State::next(calc_start)
}

fn calc_comment(lx: &mut Lexer<Kind>) -> Next<Kind> {
    lx.accept_while(|c| c != '\n');
    lx.ignore();
    State::next(calc_start)
}

// ============================================================================
// CALC WITH TYPED VALUES
// ============================================================================

pub fn calc_values(lx: &mut Lexer<Kind, Value>) -> Next<Kind, Value> {
    lx.skip_whitespace();
    if lx.is_end_of_input() {
        return None;
    }
    if lx.accept_while(|c| c.is_ascii_digit()) > 0 {
        lx.emit_transformed(Kind::Number, |text| match text.parse() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Text(text.to_string()),
        });
        return State::next(calc_values);
    }
    if lx.accept_while(is_ident_continue) > 0 {
        lx.emit(Kind::Ident);
        return State::next(calc_values);
    }
    let c = lx.advance();
    lx.error(format!("unexpected {:?}", c))
}

// ============================================================================
// RUNS GRAMMAR
// ============================================================================

/// Emits whitespace and non-whitespace runs alike, then EndOfInput.
pub fn runs_all(lx: &mut Lexer<Kind>) -> Next<Kind> {
    if lx.is_end_of_input() {
        lx.emit(TokenKind::EndOfInput);
        return None;
    }
    if lx.is_whitespace() {
        lx.accept_while(char::is_whitespace);
        lx.emit(Kind::Space);
    } else {
        lx.accept_while(|c| !c.is_whitespace());
        lx.emit(Kind::Word);
    }
    State::next(runs_all)
}

/// Emits non-whitespace runs and drops whitespace.
pub fn runs_words(lx: &mut Lexer<Kind>) -> Next<Kind> {
    lx.skip_whitespace();
    if lx.is_end_of_input() {
        return None;
    }
    lx.accept_while(|c| !c.is_whitespace());
    lx.emit(Kind::Word);
    State::next(runs_words)
}

// ============================================================================
// HELPERS
// ============================================================================

pub fn scan(input: &str) -> Vec<Token<Kind>> {
    tokenize("calc", input, calc_start).expect("scan should run")
}

/// Kinds and values, for compact assertions.
pub fn pairs(tokens: &[Token<Kind>]) -> Vec<(TokenKind<Kind>, String)> {
    tokens
        .iter()
        .map(|t| (*t.kind(), t.value().clone()))
        .collect()
}

pub fn num(text: &str) -> (TokenKind<Kind>, String) {
    (TokenKind::Custom(Kind::Number), text.to_string())
}

pub fn ident(text: &str) -> (TokenKind<Kind>, String) {
    (TokenKind::Custom(Kind::Ident), text.to_string())
}

pub fn op(text: &str) -> (TokenKind<Kind>, String) {
    (TokenKind::Custom(Kind::Op), text.to_string())
}

pub fn eof() -> (TokenKind<Kind>, String) {
    (TokenKind::EndOfInput, String::new())
}

pub fn error(message: &str) -> (TokenKind<Kind>, String) {
    (TokenKind::Error, message.to_string())
}
