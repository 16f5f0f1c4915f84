//! Configuration validation errors.

use std::fmt;

/// One of the four configurable string sets.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SymbolSet {
    ReservedWords,
    Operators,
    Punctuation,
    Grouping,
}

impl SymbolSet {
    /// The key this set has in the JSON configuration.
    pub fn key(self) -> &'static str {
        match self {
            SymbolSet::ReservedWords => "palabrasReservadas",
            SymbolSet::Operators => "operadores",
            SymbolSet::Punctuation => "puntuacion",
            SymbolSet::Grouping => "agrupacion",
        }
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.key())
    }
}

/// One of the three comment delimiters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CommentDelimiterKind {
    Line,
    BlockStart,
    BlockEnd,
}

impl CommentDelimiterKind {
    /// The key this delimiter has inside the JSON `comentarios` object.
    pub fn key(self) -> &'static str {
        match self {
            CommentDelimiterKind::Line => "linea",
            CommentDelimiterKind::BlockStart => "bloqueInicio",
            CommentDelimiterKind::BlockEnd => "bloqueFin",
        }
    }
}

impl fmt::Display for CommentDelimiterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`comentarios.{}`", self.key())
    }
}

/// A single validation problem.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ConfigError {
    #[error("{set} contains a blank entry")]
    EmptySymbol { set: SymbolSet },

    #[error("{which} is missing or blank")]
    MissingCommentDelimiter { which: CommentDelimiterKind },

    #[error("symbol `{symbol}` is declared in both {first} and {second}")]
    DuplicateSymbol {
        symbol: String,
        first: SymbolSet,
        second: SymbolSet,
    },
}

/// Every problem found while validating a configuration (never empty).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ConfigErrors(Vec<ConfigError>);

impl ConfigErrors {
    /// `None` when there is nothing to report.
    pub(crate) fn from_vec(errors: Vec<ConfigError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(ConfigErrors(errors))
        }
    }

    pub fn errors(&self) -> &[ConfigError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for ConfigErrors {
    type Item = ConfigError;
    type IntoIter = std::vec::IntoIter<ConfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration ({} problem", self.0.len())?;
        if self.0.len() != 1 {
            f.write_str("s")?;
        }
        f.write_str(")")?;
        for err in &self.0 {
            write!(f, "\n  - {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigErrors {}
