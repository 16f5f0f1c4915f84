use pretty_assertions::assert_eq;

use super::*;

fn table(symbols: &[&str]) -> SymbolTable {
    SymbolTable::new(symbols.iter().copied()).unwrap()
}

// === SymbolTable ===

#[test]
fn longer_symbol_wins_regardless_of_declaration_order() {
    let t = table(&["=", "=="]);
    assert_eq!(t.longest_match(&CharCursor::new("==x")), Some("=="));
    assert_eq!(t.longest_match(&CharCursor::new("=x")), Some("="));
}

#[test]
fn three_way_prefix_chain() {
    let t = table(&["<", "<<=", "<<"]);
    assert_eq!(t.symbols(), ["<<=", "<<", "<"]);
    assert_eq!(t.longest_match(&CharCursor::new("<<<")), Some("<<"));
    assert_eq!(t.longest_match(&CharCursor::new("<<=1")), Some("<<="));
}

#[test]
fn equal_lengths_keep_declaration_order() {
    let t = table(&["+", "-", "*"]);
    assert_eq!(t.symbols(), ["+", "-", "*"]);
}

#[test]
fn no_match_does_not_consume() {
    let t = table(&["+"]);
    let cursor = CharCursor::new("-1");
    assert_eq!(t.longest_match(&cursor), None);
    assert_eq!(cursor.index(), 0);
}

#[test]
fn eof_never_matches() {
    let t = table(&["+"]);
    assert_eq!(t.longest_match(&CharCursor::new("")), None);
}

#[test]
fn symbol_cut_off_by_eof_does_not_match() {
    let t = table(&["==="]);
    assert_eq!(t.longest_match(&CharCursor::new("==")), None);
}

#[test]
fn empty_symbol_is_rejected() {
    assert_eq!(SymbolTable::new(["+", ""]).unwrap_err(), EmptySymbol);
}

#[test]
fn duplicates_are_collapsed() {
    let t = table(&["+", "+", "++"]);
    assert_eq!(t.len(), 2);
    assert_eq!(t.max_len(), 2);
    assert!(t.contains("++"));
    assert!(!t.contains("+++"));
}

#[test]
fn empty_table() {
    let t = SymbolTable::default();
    assert!(t.is_empty());
    assert_eq!(t.max_len(), 0);
    assert_eq!(t.longest_match(&CharCursor::new("+")), None);
}

#[test]
fn multibyte_symbols_measure_chars() {
    let t = table(&["→", "¬="]);
    assert_eq!(t.max_len(), 2);
    assert_eq!(t.longest_match(&CharCursor::new("→x")), Some("→"));
}

// === ReservedWords ===

#[test]
fn reserved_words_are_case_sensitive_and_exact() {
    let words = ReservedWords::new(["si", "mientras"]);
    assert!(words.contains("si"));
    assert!(!words.contains("Si"));
    assert!(!words.contains("s"));
    assert!(!words.contains("sino"));
    assert_eq!(words.len(), 2);
    assert!(!words.is_empty());
}
