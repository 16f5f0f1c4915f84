use pretty_assertions::assert_eq;

use super::*;

fn config() -> LexerConfig {
    LexerConfig::builder()
        .reserved_words(["si", "sino", "mientras"])
        .operators(["+", "-", "=", "==", "<", "<="])
        .punctuations([";", ","])
        .groupings(["(", ")", "{", "}"])
        .line_comment("//")
        .block_comment("/*", "*/")
        .build()
        .unwrap()
}

fn pos(line: u32, column: u32) -> Position {
    Position::new(line, column).unwrap()
}

fn lex(text: &str) -> LexResult {
    LexerEngine::new(&config()).analyze(text)
}

fn kinds(text: &str) -> Vec<(TokenType, String)> {
    lex(text)
        .tokens
        .into_iter()
        .map(|t| (t.kind, t.lexeme))
        .collect()
}

fn tok(kind: TokenType, lexeme: &str) -> (TokenType, String) {
    (kind, lexeme.to_owned())
}

// === Tokens ===

#[test]
fn empty_text_yields_nothing() {
    assert_eq!(lex(""), LexResult::default());
    assert_eq!(lex("  \r\n \n"), LexResult::default());
}

#[test]
fn statement_is_tokenized_with_positions() {
    let result = lex("si (x1 <= 10) {\n  y = \"ok\";\n}");
    assert!(result.is_clean());
    assert_eq!(
        result.tokens,
        vec![
            Token::new(TokenType::ReservedWord, "si", pos(1, 1)),
            Token::new(TokenType::Grouping, "(", pos(1, 4)),
            Token::new(TokenType::Identifier, "x1", pos(1, 5)),
            Token::new(TokenType::Operator, "<=", pos(1, 8)),
            Token::new(TokenType::Number, "10", pos(1, 11)),
            Token::new(TokenType::Grouping, ")", pos(1, 13)),
            Token::new(TokenType::Grouping, "{", pos(1, 15)),
            Token::new(TokenType::Identifier, "y", pos(2, 3)),
            Token::new(TokenType::Operator, "=", pos(2, 5)),
            Token::new(TokenType::String, "\"ok\"", pos(2, 7)),
            Token::new(TokenType::Punctuation, ";", pos(2, 11)),
            Token::new(TokenType::Grouping, "}", pos(3, 1)),
        ]
    );
}

#[test]
fn reserved_words_are_exact_and_case_sensitive() {
    assert_eq!(
        kinds("si Si sino sin"),
        vec![
            tok(TokenType::ReservedWord, "si"),
            tok(TokenType::Identifier, "Si"),
            tok(TokenType::ReservedWord, "sino"),
            tok(TokenType::Identifier, "sin"),
        ]
    );
}

#[test]
fn longest_operator_wins() {
    assert_eq!(kinds("=="), vec![tok(TokenType::Operator, "==")]);
    assert_eq!(
        kinds("==="),
        vec![tok(TokenType::Operator, "=="), tok(TokenType::Operator, "=")]
    );
}

#[test]
fn operator_with_inner_space_is_one_token() {
    let config = LexerConfig::builder()
        .operators(["<", "=", "< ="])
        .line_comment("//")
        .block_comment("/*", "*/")
        .build()
        .unwrap();
    let result = LexerEngine::new(&config).analyze("a < = b < c");
    assert!(result.is_clean());
    assert_eq!(
        result.tokens,
        vec![
            Token::new(TokenType::Identifier, "a", pos(1, 1)),
            Token::new(TokenType::Operator, "< =", pos(1, 3)),
            Token::new(TokenType::Identifier, "b", pos(1, 7)),
            Token::new(TokenType::Operator, "<", pos(1, 9)),
            Token::new(TokenType::Identifier, "c", pos(1, 11)),
        ]
    );
}

#[test]
fn decimal_is_tried_before_number() {
    assert_eq!(kinds("12.5"), vec![tok(TokenType::Decimal, "12.5")]);
    assert_eq!(
        kinds("12 5"),
        vec![tok(TokenType::Number, "12"), tok(TokenType::Number, "5")]
    );
}

#[test]
fn identifiers_stop_at_underscore() {
    let result = lex("a_b");
    assert_eq!(
        result
            .tokens
            .iter()
            .map(|t| t.lexeme.as_str())
            .collect::<Vec<_>>(),
        vec!["a", "b"]
    );
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].text, "_");
}

// === Comments ===

#[test]
fn comments_produce_no_tokens() {
    let result = lex("// x\n1 /* y\n z */ 2");
    assert!(result.is_clean());
    assert_eq!(
        result.tokens,
        vec![
            Token::new(TokenType::Number, "1", pos(2, 1)),
            Token::new(TokenType::Number, "2", pos(3, 7)),
        ]
    );
}

#[test]
fn unterminated_block_comment_consumes_to_eof() {
    let result = lex("1 /* 2 3");
    assert_eq!(result.tokens, vec![Token::new(TokenType::Number, "1", pos(1, 1))]);
    assert_eq!(
        result.errors,
        vec![LexError {
            text: "/*".to_owned(),
            position: pos(1, 3),
            kind: LexErrorKind::UnterminatedBlockComment,
            len: 6,
        }]
    );
}

#[test]
fn dangling_block_close_is_an_error() {
    let result = lex("a */ b");
    assert_eq!(
        result.errors,
        vec![LexError {
            text: "*/".to_owned(),
            position: pos(1, 3),
            kind: LexErrorKind::DanglingBlockCloseDelimiter,
            len: 2,
        }]
    );
    assert_eq!(result.tokens.len(), 2);
}

#[test]
fn block_close_inside_a_comment_is_not_dangling() {
    assert!(lex("/* a */").is_clean());
}

// === Errors ===

#[test]
fn unterminated_string() {
    let result = lex("\"abc");
    assert!(result.tokens.is_empty());
    assert_eq!(
        result.errors,
        vec![LexError {
            text: "\"".to_owned(),
            position: Position::START,
            kind: LexErrorKind::UnterminatedString,
            len: 4,
        }]
    );
}

#[test]
fn string_alphabet_violation_resumes_after_offender() {
    let result = lex("\"ab@cd\"");
    assert_eq!(
        result.errors[0],
        LexError {
            text: "\"ab".to_owned(),
            position: Position::START,
            kind: LexErrorKind::StringAlphabetViolation,
            len: 4,
        }
    );
    // Scanning resumes at "cd\"", whose quote opens a new, unterminated string.
    assert_eq!(result.tokens, vec![Token::new(TokenType::Identifier, "cd", pos(1, 5))]);
    assert_eq!(result.errors[1].kind, LexErrorKind::UnterminatedString);
    assert_eq!(result.errors[1].position, pos(1, 7));
}

#[test]
fn malformed_integer_takes_one_letter() {
    let result = lex("585fg");
    assert_eq!(
        result.errors,
        vec![LexError {
            text: "585f".to_owned(),
            position: Position::START,
            kind: LexErrorKind::MalformedInteger,
            len: 4,
        }]
    );
    assert_eq!(result.tokens, vec![Token::new(TokenType::Identifier, "g", pos(1, 5))]);
}

#[test]
fn malformed_decimal_takes_the_dot() {
    let result = lex("12.;");
    assert_eq!(
        result.errors,
        vec![LexError {
            text: "12.".to_owned(),
            position: Position::START,
            kind: LexErrorKind::MalformedDecimal,
            len: 3,
        }]
    );
    assert_eq!(result.tokens, vec![Token::new(TokenType::Punctuation, ";", pos(1, 4))]);
}

#[test]
fn alphabet_violation_consumes_one_character() {
    let result = lex("@é\t1");
    let errors: Vec<_> = result
        .errors
        .iter()
        .map(|e| (e.text.as_str(), e.position, e.len))
        .collect();
    assert_eq!(
        errors,
        vec![("@", pos(1, 1), 1), ("é", pos(1, 2), 1), ("\t", pos(1, 3), 1)]
    );
    assert_eq!(result.tokens, vec![Token::new(TokenType::Number, "1", pos(1, 4))]);
    assert!(result.has_errors());
}

#[test]
fn lone_char_of_multichar_symbol_is_outside_alphabet() {
    let config = LexerConfig::builder()
        .operator("<>")
        .line_comment("//")
        .block_comment("/*", "*/")
        .build()
        .unwrap();
    let result = analyze(&config, "< <>");
    assert_eq!(result.errors[0].kind, LexErrorKind::AlphabetViolation);
    assert_eq!(result.tokens, vec![Token::new(TokenType::Operator, "<>", pos(1, 3))]);
}

// === Positions ===

#[test]
fn crlf_counts_as_one_line_break() {
    let result = lex("a\r\nb\rc\nd");
    let positions: Vec<_> = result.tokens.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![pos(1, 1), pos(2, 1), pos(3, 1), pos(4, 1)]);
}

#[test]
fn positions_after_multiline_string() {
    let result = lex("\"a\nb\" x");
    assert_eq!(result.tokens[1], Token::new(TokenType::Identifier, "x", pos(2, 4)));
}

// === Engine ===

#[test]
fn strategies_agree() {
    let text = "si x1 = 12.5 + 585f - 7. ; \"s\" @ 3";
    let hand = LexerEngine::new(&config());
    let auto = LexerEngine::with_strategy(&config(), ScanStrategy::Automaton);
    assert_eq!(hand.strategy(), ScanStrategy::HandWritten);
    assert_eq!(auto.strategy(), ScanStrategy::Automaton);
    assert_eq!(auto.analyze(text), hand.analyze(text));
}

#[test]
fn engine_is_reusable() {
    let engine = LexerEngine::new(&config());
    let first = engine.analyze("a + 1");
    let second = engine.analyze("a + 1");
    assert_eq!(first, second);
    let (tokens, errors) = second.into_parts();
    assert_eq!(tokens.len(), 3);
    assert!(errors.is_empty());
}

#[test]
fn engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LexerEngine>();
}
