//! Configuration-driven lexer.
//!
//! Turns a source text into [`Token`]s and [`LexError`]s according to a
//! [`LexerConfig`](lexa_config::LexerConfig): the reserved words, symbols
//! and comment delimiters are data, not code.
//!
//! # Architecture
//!
//! ```text
//! LexerConfig → Scanner (tables + alphabet) → LexerEngine::analyze → LexResult
//! ```
//!
//! - [`table`]: longest-match symbol tables and the reserved-word set
//! - [`recognizer`]: one non-consuming recognizer per lexical category
//! - [`policy`]: alphabet membership and error construction
//! - [`LexerEngine`]: priority-ordered dispatch and recovery
//!
//! Scanning never fails. Every malformed construct becomes a [`LexError`]
//! and scanning resumes right after it.

mod engine;
mod lex_error;
pub mod policy;
pub mod recognizer;
pub mod table;
mod token;

pub use engine::{analyze, LexResult, LexerEngine, ScanStrategy};
pub use lex_error::{LexError, LexErrorKind};
pub use token::{Token, TokenType};
