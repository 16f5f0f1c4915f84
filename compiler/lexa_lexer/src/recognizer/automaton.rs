//! Table-driven identifier and numeric recognizers.
//!
//! These answer exactly like their hand-written counterparts but run the
//! generic [`Dfa`] from `lexa_core` instead of ad hoc loops. The automata
//! depend on nothing configurable, so they are built once per process.
//!
//! Numeric automaton (accept tags in brackets):
//!
//! ```text
//! start --digit--> int [Integer] --digit--> int
//!                  int --letter--> bad_int [MalformedInteger]
//!                  int --'.'--> dot [MalformedDecimal] --digit--> frac [Decimal]
//!                                                       frac --digit--> frac
//! ```

use std::sync::OnceLock;

use lexa_core::dfa::{Dfa, DfaBuildError, DfaBuilder, DfaMatch};
use lexa_core::CharCursor;

use super::{digits_from, lexeme_at, Recognition, Scanner};
use crate::LexErrorKind;

/// Accept tags of the numeric automaton.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NumericTag {
    Integer,
    MalformedInteger,
    Decimal,
    MalformedDecimal,
}

/// The identifier automaton has a single accepting state.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Word;

/// Both automata.
#[derive(Clone, Debug)]
pub struct Automata {
    pub numeric: Dfa<NumericTag>,
    pub identifier: Dfa<Word>,
}

impl Automata {
    pub fn build() -> Result<Self, DfaBuildError> {
        Ok(Automata {
            numeric: numeric_dfa()?,
            identifier: identifier_dfa()?,
        })
    }
}

fn numeric_dfa() -> Result<Dfa<NumericTag>, DfaBuildError> {
    let mut b = DfaBuilder::new();
    let start = b.add_state();
    let int = b.add_state();
    let bad_int = b.add_state();
    let dot = b.add_state();
    let frac = b.add_state();
    b.on_range(start, '0', '9', int)
        .on_range(int, '0', '9', int)
        .on_range(int, 'a', 'z', bad_int)
        .on_range(int, 'A', 'Z', bad_int)
        .on_char(int, '.', dot)
        .on_range(dot, '0', '9', frac)
        .on_range(frac, '0', '9', frac)
        .accept(int, NumericTag::Integer)
        .accept(bad_int, NumericTag::MalformedInteger)
        .accept(dot, NumericTag::MalformedDecimal)
        .accept(frac, NumericTag::Decimal);
    b.build(start)
}

fn identifier_dfa() -> Result<Dfa<Word>, DfaBuildError> {
    let mut b = DfaBuilder::new();
    let start = b.add_state();
    let word = b.add_state();
    b.on_range(start, 'a', 'z', word)
        .on_range(start, 'A', 'Z', word)
        .on_range(word, 'a', 'z', word)
        .on_range(word, 'A', 'Z', word)
        .on_range(word, '0', '9', word)
        .accept(word, Word);
    b.build(start)
}

/// Process-wide automata, built on first use.
pub fn automata() -> Result<&'static Automata, &'static DfaBuildError> {
    static AUTOMATA: OnceLock<Result<Automata, DfaBuildError>> = OnceLock::new();
    AUTOMATA.get_or_init(Automata::build).as_ref()
}

fn numeric(cursor: &CharCursor<'_>) -> Option<DfaMatch<NumericTag>> {
    automata().ok()?.numeric.evaluate(cursor)
}

fn malformed(cursor: &CharCursor<'_>, len: usize, kind: LexErrorKind) -> Recognition {
    Recognition::MatchWithError {
        len,
        kind,
        lexeme: lexeme_at(cursor, len),
    }
}

pub fn decimal(scanner: &Scanner, cursor: &CharCursor<'_>) -> Recognition {
    if automata().is_err() {
        return super::decimal(scanner, cursor);
    }
    match numeric(cursor) {
        Some(DfaMatch {
            len,
            tag: NumericTag::Decimal,
        }) => Recognition::Match { len },
        Some(DfaMatch {
            len,
            tag: NumericTag::MalformedDecimal,
        }) => malformed(cursor, len, LexErrorKind::MalformedDecimal),
        _ => Recognition::NoMatch,
    }
}

pub fn number(scanner: &Scanner, cursor: &CharCursor<'_>) -> Recognition {
    if automata().is_err() {
        return super::number(scanner, cursor);
    }
    match numeric(cursor) {
        Some(DfaMatch {
            len,
            tag: NumericTag::Integer,
        }) => Recognition::Match { len },
        Some(DfaMatch {
            len,
            tag: NumericTag::MalformedInteger,
        }) => malformed(cursor, len, LexErrorKind::MalformedInteger),
        // The automaton ran into a fraction; the integer is its digit prefix.
        Some(DfaMatch {
            tag: NumericTag::Decimal | NumericTag::MalformedDecimal,
            ..
        }) => Recognition::Match {
            len: digits_from(cursor, 0),
        },
        None => Recognition::NoMatch,
    }
}

pub fn identifier(scanner: &Scanner, cursor: &CharCursor<'_>) -> Recognition {
    match automata() {
        Ok(automata) => automata
            .identifier
            .evaluate(cursor)
            .map_or(Recognition::NoMatch, |m| Recognition::Match { len: m.len }),
        Err(_) => super::identifier(scanner, cursor),
    }
}
