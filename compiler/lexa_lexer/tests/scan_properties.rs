#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end behavior of the engine over whole texts.
//!
//! The scenario tests pin down observable results for small inputs; the
//! property tests check that every character is accounted for exactly once,
//! that scanning is repeatable and that both scan strategies agree.

use std::collections::HashMap;

use lexa_config::LexerConfig;
use lexa_core::{char_class, CharCursor, Position};
use lexa_lexer::{analyze, LexErrorKind, LexResult, LexerEngine, ScanStrategy, TokenType};
use pretty_assertions::assert_eq;

fn config() -> LexerConfig {
    LexerConfig::builder()
        .reserved_words(["si", "mientras", "fin"])
        .operators(["=", "==", "+", "*", "<", "<="])
        .punctuations([";", ","])
        .groupings(["(", ")", "[", "]"])
        .line_comment("//")
        .block_comment("/*", "*/")
        .build()
        .unwrap()
}

fn pos(line: u32, column: u32) -> Position {
    Position::new(line, column).unwrap()
}

// === Scenarios ===

#[test]
fn equals_equals_is_one_operator() {
    let result = analyze(&config(), "==");
    assert_eq!(result.tokens.len(), 1);
    assert_eq!(result.tokens[0].kind, TokenType::Operator);
    assert_eq!(result.tokens[0].lexeme, "==");
}

#[test]
fn decimal_is_one_token() {
    let result = analyze(&config(), "12.5");
    assert!(result.is_clean());
    assert_eq!(result.tokens.len(), 1);
    assert_eq!(result.tokens[0].kind, TokenType::Decimal);
    assert_eq!(result.tokens[0].lexeme, "12.5");
}

#[test]
fn line_comment_is_suppressed() {
    let result = analyze(&config(), "// x\n1");
    assert!(result.tokens.iter().all(|t| t.kind != TokenType::Comment));
    assert_eq!(result.tokens.len(), 1);
    assert_eq!(result.tokens[0].kind, TokenType::Number);
    assert_eq!(result.tokens[0].lexeme, "1");
    assert_eq!(result.tokens[0].position, pos(2, 1));
}

#[test]
fn unterminated_string_reports_quote_at_start() {
    let result = analyze(&config(), "\"abc");
    assert!(result.tokens.is_empty());
    assert_eq!(result.errors.len(), 1);
    let err = &result.errors[0];
    assert_eq!(err.text, "\"");
    assert_eq!(err.message(), "Cadena no cerrada");
    assert_eq!(err.position, pos(1, 1));
}

#[test]
fn malformed_integer_spans_digits_and_one_letter() {
    let result = analyze(&config(), "585f");
    assert!(result.tokens.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].text, "585f");
    assert_eq!(result.errors[0].message(), "Número mal formado");
    assert_eq!(result.errors[0].len, 4);
}

#[test]
fn unknown_symbol_is_one_character_error() {
    let result = analyze(&config(), "@");
    assert!(result.tokens.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].text, "@");
    assert_eq!(result.errors[0].message(), "Símbolo fuera del alfabeto permitido");
    assert_eq!(result.errors[0].len, 1);
}

#[test]
fn error_kinds_in_source_order() {
    let text = "*/ \"a@b 7. 9x ~ /* never \"open";
    let kinds: Vec<_> = analyze(&config(), text)
        .errors
        .iter()
        .map(|e| e.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            LexErrorKind::DanglingBlockCloseDelimiter,
            LexErrorKind::StringAlphabetViolation,
            LexErrorKind::MalformedDecimal,
            LexErrorKind::MalformedInteger,
            LexErrorKind::AlphabetViolation,
            LexErrorKind::UnterminatedBlockComment,
        ]
    );
}

#[test]
fn block_comment_without_close_inside_string_is_part_of_the_string() {
    let result = analyze(&config(), "\"/* x\" fin");
    assert!(result.is_clean());
    assert_eq!(result.tokens[0].kind, TokenType::String);
    assert_eq!(result.tokens[1].kind, TokenType::ReservedWord);
}

// === Properties ===

/// Maps the position of every non-whitespace character to its char index.
///
/// Whitespace is skipped: the `\n` of a CRLF shares its position with the
/// next character, and no lexeme starts on whitespace anyway.
fn index_by_position(text: &str) -> HashMap<Position, usize> {
    let mut cursor = CharCursor::new(text);
    let mut map = HashMap::new();
    while let Some(c) = cursor.peek() {
        if !char_class::is_space_or_newline(c) {
            map.insert(cursor.position(), cursor.index());
        }
        cursor.bump();
    }
    map
}

/// Tokens and errors tile the text: no overlap, and only top-level
/// whitespace between or after them.
fn assert_total_coverage(text: &str, result: &LexResult) {
    let index = index_by_position(text);
    let mut spans: Vec<(usize, usize)> = result
        .tokens
        .iter()
        .map(|t| (index[&t.position], t.len()))
        .chain(result.errors.iter().map(|e| (index[&e.position], e.len)))
        .collect();
    spans.sort_unstable();

    let chars: Vec<char> = text.chars().collect();
    let mut covered = 0;
    for (start, len) in spans {
        assert!(start >= covered, "overlapping span at {start} in {text:?}");
        assert!(
            chars[covered..start]
                .iter()
                .all(|&c| char_class::is_space_or_newline(c)),
            "gap before {start} in {text:?}"
        );
        assert!(len >= 1, "empty span at {start} in {text:?}");
        covered = start + len;
    }
    assert!(covered <= chars.len());
    assert!(chars[covered..]
        .iter()
        .all(|&c| char_class::is_space_or_newline(c)));
}

#[test]
fn coverage_of_a_mixed_text() {
    let text = "si (x<=1)\r\n  y = \"a b\" * 2.50 ;@ 33q 4. ]";
    assert_total_coverage(text, &analyze(&config(), text));
}

#[allow(clippy::disallowed_types, reason = "proptest macros internally use Arc")]
mod proptest_engine {
    use proptest::prelude::*;

    use super::*;

    /// Texts over the configured alphabet plus a few foreign characters.
    /// There is no `/`, so no comment can form.
    fn source() -> impl Strategy<Value = String> {
        "[a-z0-9A-Z =+*<;,()\\[\\]\".\r\n@~\té_]{0,40}"
    }

    proptest! {
        #[test]
        fn every_character_is_accounted_for(text in source()) {
            let result = analyze(&config(), &text);
            assert_total_coverage(&text, &result);
        }

        #[test]
        fn analysis_is_idempotent(text in source()) {
            let engine = LexerEngine::new(&config());
            prop_assert_eq!(engine.analyze(&text), engine.analyze(&text));
        }

        #[test]
        fn strategies_are_observationally_identical(text in source()) {
            let hand = LexerEngine::new(&config());
            let auto = LexerEngine::with_strategy(&config(), ScanStrategy::Automaton);
            prop_assert_eq!(hand.analyze(&text), auto.analyze(&text));
        }

        #[test]
        fn arbitrary_text_terminates(text in any::<String>()) {
            let result = analyze(&config(), &text);
            let consumed: usize = result.tokens.iter().map(|t| t.len()).sum::<usize>()
                + result.errors.iter().map(|e| e.len).sum::<usize>();
            prop_assert!(consumed <= text.chars().count());
        }
    }
}
