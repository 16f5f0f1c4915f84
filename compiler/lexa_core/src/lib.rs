//! Low-level scanning primitives for lexa.
//!
//! This crate is standalone: it knows nothing about configuration, token
//! types or error catalogues. It provides
//!
//! - [`Position`]: 1-based line/column of a lexeme start
//! - [`CharCursor`]: a `Copy` cursor over `&str` with non-consuming lookahead
//!   and CR/LF/CRLF-aware position tracking
//! - [`char_class`]: the ASCII character classes of the configurable alphabet
//! - [`dfa`]: a generic maximal-munch automaton runner and builder
//!
//! ```text
//! &str ──► CharCursor ──► recognizers (lexa_lexer) ──► (tokens, errors)
//!              │
//!              └──► Dfa<T>::evaluate (table-driven alternative)
//! ```

pub mod char_class;
mod cursor;
pub mod dfa;
mod position;

pub use cursor::CharCursor;
pub use position::Position;
