//! Alphabet configuration for the lexa lexer.
//!
//! A [`LexerConfig`] names everything the scanner does not hard-code: the
//! reserved words, the operator / punctuation / grouping symbols and the
//! comment delimiters. It can only be obtained through validation
//! ([`ConfigBuilder::build`] or [`LexerConfig::from_raw`]), so a value of
//! this type is always internally consistent:
//!
//! - no entry is blank (entries are trimmed on the way in)
//! - all three comment delimiters are present
//! - no symbol belongs to more than one of operators, punctuation, grouping
//!
//! Validation reports every problem at once as [`ConfigErrors`].

mod builder;
mod error;
mod raw;

pub use builder::ConfigBuilder;
pub use error::{CommentDelimiterKind, ConfigError, ConfigErrors, SymbolSet};
pub use raw::{RawComments, RawConfig};

use rustc_hash::FxHashSet;

/// Line and block comment delimiters.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CommentDelimiters {
    line: String,
    block_start: String,
    block_end: String,
}

impl CommentDelimiters {
    /// Prefix of a line comment (e.g. `//`).
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Opening delimiter of a block comment (e.g. `/*`).
    pub fn block_start(&self) -> &str {
        &self.block_start
    }

    /// Closing delimiter of a block comment (e.g. `*/`).
    pub fn block_end(&self) -> &str {
        &self.block_end
    }

    fn all(&self) -> [&str; 3] {
        [&self.line, &self.block_start, &self.block_end]
    }
}

/// A validated, immutable alphabet configuration.
///
/// Sets keep their first-seen order with duplicates removed.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexerConfig {
    reserved_words: Vec<String>,
    operators: Vec<String>,
    punctuation: Vec<String>,
    grouping: Vec<String>,
    comments: CommentDelimiters,
}

impl LexerConfig {
    /// Start building a configuration.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Validate the serialized shape.
    pub fn from_raw(raw: RawConfig) -> Result<Self, ConfigErrors> {
        let mut builder = ConfigBuilder::new()
            .reserved_words(raw.reserved_words)
            .operators(raw.operators)
            .punctuations(raw.punctuation)
            .groupings(raw.grouping);
        if let Some(comments) = raw.comments {
            builder = builder.comment_parts(comments.line, comments.block_start, comments.block_end);
        }
        builder.build()
    }

    /// The serialized shape of this configuration.
    pub fn to_raw(&self) -> RawConfig {
        RawConfig {
            reserved_words: self.reserved_words.clone(),
            operators: self.operators.clone(),
            punctuation: self.punctuation.clone(),
            grouping: self.grouping.clone(),
            comments: Some(RawComments {
                line: Some(self.comments.line.clone()),
                block_start: Some(self.comments.block_start.clone()),
                block_end: Some(self.comments.block_end.clone()),
            }),
        }
    }

    pub fn reserved_words(&self) -> &[String] {
        &self.reserved_words
    }

    pub fn operators(&self) -> &[String] {
        &self.operators
    }

    pub fn punctuation(&self) -> &[String] {
        &self.punctuation
    }

    pub fn grouping(&self) -> &[String] {
        &self.grouping
    }

    pub fn comments(&self) -> &CommentDelimiters {
        &self.comments
    }

    /// Every distinct character used by a symbol or comment delimiter.
    ///
    /// Together with letters, digits, space/CR/LF and `"`, this is the
    /// full alphabet of the configured language.
    pub fn symbol_chars(&self) -> FxHashSet<char> {
        self.operators
            .iter()
            .chain(&self.punctuation)
            .chain(&self.grouping)
            .map(String::as_str)
            .chain(self.comments.all())
            .flat_map(str::chars)
            .collect()
    }
}
