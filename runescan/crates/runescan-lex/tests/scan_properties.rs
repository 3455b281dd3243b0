//! Property-based tests for cursor arithmetic and emission.

mod common;

use common::*;
use proptest::prelude::*;
use runescan_lex::{tokenize, Cursor, Lexer, Next, TokenKind};

/// Mixed ASCII, multi-byte letters, digits and Unicode whitespace.
const TEXT: &str = "[a-z0-9éß日本😀٣ \t\n\u{3000}\u{00A0}+()]{0,64}";

proptest! {
    #[test]
    fn prop_spans_reconstruct_input(input in TEXT) {
        let tokens = tokenize("runs", input.clone(), runs_all).unwrap();
        prop_assert!(tokens.last().map_or(false, |t| t.is_end_of_input()));

        let rebuilt: String = tokens
            .iter()
            .filter(|t| !t.kind().is_terminal())
            .map(|t| t.span().slice(&input))
            .collect();
        prop_assert_eq!(&rebuilt, &input);

        let values: String = tokens
            .iter()
            .filter(|t| !t.kind().is_terminal())
            .map(|t| t.value().as_str())
            .collect();
        prop_assert_eq!(&values, &input);

        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span().is_followed_by(pair[1].span()));
        }
    }

    #[test]
    fn prop_ignored_whitespace_removed(input in TEXT) {
        let tokens = tokenize("words", input.clone(), runs_words).unwrap();
        let rebuilt: String = tokens
            .iter()
            .filter(|t| !t.kind().is_terminal())
            .map(|t| t.value().as_str())
            .collect();
        let expected: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(rebuilt, expected);
        prop_assert_eq!(tokens.iter().filter(|t| t.is_end_of_input()).count(), 1);
    }

    #[test]
    fn prop_advance_backup_is_noop(input in TEXT) {
        let mut cursor = Cursor::new(input.as_str());
        loop {
            let before = cursor.pos();
            let c = cursor.advance();
            cursor.backup();
            prop_assert_eq!(cursor.pos(), before);
            if c.is_none() {
                break;
            }
            prop_assert_eq!(cursor.advance(), c);
        }
        prop_assert!(cursor.is_end_of_input());
    }

    #[test]
    fn prop_advance_decodes_chars(input in TEXT) {
        let mut cursor = Cursor::new(input.as_str());
        let mut seen = Vec::new();
        while let Some(c) = cursor.advance() {
            prop_assert_eq!(cursor.width(), c.len_utf8());
            seen.push(c);
        }
        prop_assert_eq!(cursor.width(), 0);
        prop_assert_eq!(seen, input.chars().collect::<Vec<_>>());
    }

    #[test]
    fn prop_peek_is_stable(input in TEXT, skip in 0usize..80, times in 1usize..8) {
        let mut cursor = Cursor::new(input.as_str());
        for _ in 0..skip {
            cursor.advance();
        }
        let pos = cursor.pos();
        let first = cursor.peek();
        prop_assert_eq!(first, cursor.current_character());
        for _ in 0..times {
            prop_assert_eq!(cursor.peek(), first);
        }
        prop_assert_eq!(cursor.pos(), pos);
    }

    #[test]
    fn prop_peek_n_clamps(input in TEXT, skip in 0usize..80, count in 0usize..100) {
        let mut cursor = Cursor::new(input.as_str());
        for _ in 0..skip {
            cursor.advance();
        }
        let expected: String = cursor.remaining_text().chars().take(count).collect();
        prop_assert_eq!(cursor.peek_n(count), expected.as_str());
    }

    #[test]
    fn prop_whitespace_only_yields_single_eof(input in "[ \t\n\r\u{3000}\u{2003}\u{00A0}]{0,32}") {
        fn skip(lx: &mut Lexer<Kind>) -> Next<Kind> {
            lx.skip_whitespace();
            None
        }

        let tokens = tokenize("blank", input, skip).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(*tokens[0].kind(), TokenKind::EndOfInput);
    }

    #[test]
    fn prop_calc_never_emits_after_error(input in "[a-z0-9 +$]{0,40}") {
        let tokens = scan(&input);
        let last = tokens.last().expect("at least one token");
        prop_assert!(last.kind().is_terminal());
        let terminals = tokens.iter().filter(|t| t.kind().is_terminal()).count();
        prop_assert_eq!(terminals, 1);
        prop_assert_eq!(last.is_error(), input.contains('$'));
    }
}
