//! Per-category recognizers.
//!
//! A recognizer looks at the unread text and answers "does my category
//! start here, and how far does it reach?" without consuming anything.
//! Every recognizer has the same shape, [`RecognizeFn`], so the engine can
//! walk an ordered table of them and stop at the first that answers with
//! something other than [`Recognition::NoMatch`].
//!
//! # Priority
//!
//! ```text
//! line comment > block comment > string > decimal > number > identifier
//!   > operator > punctuation > grouping
//! ```
//!
//! Decimal must come before number: otherwise `12.5` would become `12`
//! followed by a stray `.5`.

pub mod automaton;
mod comment;
mod identifier;
mod number;
mod string;
mod symbol;

pub use comment::{block_comment, line_comment};
pub use identifier::identifier;
pub use number::{decimal, number};
pub use string::string;
pub use symbol::{grouping, operator, punctuation};

use lexa_config::{CommentDelimiters, LexerConfig};
use lexa_core::CharCursor;

use crate::policy::AlphabetPolicy;
use crate::table::{ReservedWords, SymbolTable};
use crate::LexErrorKind;

/// Outcome of asking one recognizer about the current position.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Recognition {
    /// The category does not start here.
    NoMatch,
    /// A well-formed lexeme of `len` characters.
    Match { len: usize },
    /// A malformed lexeme: consume `len` characters and report `lexeme`.
    MatchWithError {
        len: usize,
        kind: LexErrorKind,
        lexeme: String,
    },
}

impl Recognition {
    #[inline]
    pub fn is_match(&self) -> bool {
        !matches!(self, Recognition::NoMatch)
    }

    /// Characters to consume (0 for `NoMatch`).
    pub fn len(&self) -> usize {
        match self {
            Recognition::NoMatch => 0,
            Recognition::Match { len } | Recognition::MatchWithError { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lexical categories, in the order the engine tries them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
    LineComment,
    BlockComment,
    String,
    Decimal,
    Number,
    Identifier,
    Operator,
    Punctuation,
    Grouping,
}

/// Signature shared by every recognizer.
pub type RecognizeFn = fn(&Scanner, &CharCursor<'_>) -> Recognition;

/// Hand-written recognizers in priority order.
pub static HAND_WRITTEN: [(Category, RecognizeFn); 9] = [
    (Category::LineComment, line_comment),
    (Category::BlockComment, block_comment),
    (Category::String, string),
    (Category::Decimal, decimal),
    (Category::Number, number),
    (Category::Identifier, identifier),
    (Category::Operator, operator),
    (Category::Punctuation, punctuation),
    (Category::Grouping, grouping),
];

/// Same order, with identifiers and numerics driven by automata.
pub static AUTOMATON: [(Category, RecognizeFn); 9] = [
    (Category::LineComment, line_comment),
    (Category::BlockComment, block_comment),
    (Category::String, string),
    (Category::Decimal, automaton::decimal),
    (Category::Number, automaton::number),
    (Category::Identifier, automaton::identifier),
    (Category::Operator, operator),
    (Category::Punctuation, punctuation),
    (Category::Grouping, grouping),
];

/// Everything the recognizers read, built once per configuration.
#[derive(Clone, Debug)]
pub struct Scanner {
    comments: CommentDelimiters,
    operators: SymbolTable,
    punctuation: SymbolTable,
    grouping: SymbolTable,
    reserved: ReservedWords,
    alphabet: AlphabetPolicy,
}

impl Scanner {
    pub fn new(config: &LexerConfig) -> Self {
        Scanner {
            comments: config.comments().clone(),
            operators: SymbolTable::from_validated(config.operators()),
            punctuation: SymbolTable::from_validated(config.punctuation()),
            grouping: SymbolTable::from_validated(config.grouping()),
            reserved: ReservedWords::new(config.reserved_words().iter().cloned()),
            alphabet: AlphabetPolicy::new(config),
        }
    }

    pub fn comments(&self) -> &CommentDelimiters {
        &self.comments
    }

    pub fn operators(&self) -> &SymbolTable {
        &self.operators
    }

    pub fn punctuation(&self) -> &SymbolTable {
        &self.punctuation
    }

    pub fn grouping(&self) -> &SymbolTable {
        &self.grouping
    }

    pub fn reserved_words(&self) -> &ReservedWords {
        &self.reserved
    }

    pub fn alphabet(&self) -> &AlphabetPolicy {
        &self.alphabet
    }
}

/// The `len` characters starting at the cursor.
pub(crate) fn lexeme_at(cursor: &CharCursor<'_>, len: usize) -> String {
    let mut end = *cursor;
    end.advance_n(len);
    end.slice_from(cursor).to_owned()
}

/// Number of ASCII digits starting `skip` characters after the cursor.
pub(crate) fn digits_from(cursor: &CharCursor<'_>, skip: usize) -> usize {
    cursor
        .rest()
        .chars()
        .skip(skip)
        .take_while(|&c| lexa_core::char_class::is_digit(c))
        .count()
}
