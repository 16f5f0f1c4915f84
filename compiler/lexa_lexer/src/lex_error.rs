//! Lexical errors.
//!
//! Every malformed construct becomes a [`LexError`] and scanning resumes
//! after it. Messages are a fixed vocabulary: report consumers match on
//! the exact strings returned by [`LexErrorKind::message`].

use std::fmt;

use lexa_core::Position;

/// What went wrong.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LexErrorKind {
    /// Block comment opened but never closed before EOF.
    UnterminatedBlockComment,
    /// String opened with `"` but never closed before EOF.
    UnterminatedString,
    /// A character inside a string is outside the alphabet.
    StringAlphabetViolation,
    /// Digits and `.` with no digit after the dot (`12.`).
    MalformedDecimal,
    /// Digits immediately followed by a letter (`585f`).
    MalformedInteger,
    /// Block comment closing delimiter with no opening one.
    DanglingBlockCloseDelimiter,
    /// A character that can start no lexeme of the configured language.
    AlphabetViolation,
}

impl LexErrorKind {
    pub const ALL: [LexErrorKind; 7] = [
        LexErrorKind::UnterminatedBlockComment,
        LexErrorKind::UnterminatedString,
        LexErrorKind::StringAlphabetViolation,
        LexErrorKind::MalformedDecimal,
        LexErrorKind::MalformedInteger,
        LexErrorKind::DanglingBlockCloseDelimiter,
        LexErrorKind::AlphabetViolation,
    ];

    /// The user-facing message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            LexErrorKind::UnterminatedBlockComment => "Comentario de bloque no cerrado",
            LexErrorKind::UnterminatedString => "Cadena no cerrada",
            LexErrorKind::StringAlphabetViolation => {
                "Símbolo fuera del alfabeto permitido en cadena"
            }
            LexErrorKind::MalformedDecimal => "Decimal mal formado: faltan dígitos",
            LexErrorKind::MalformedInteger => "Número mal formado",
            LexErrorKind::DanglingBlockCloseDelimiter => {
                "Delimitador de cierre de bloque sin apertura"
            }
            LexErrorKind::AlphabetViolation => "Símbolo fuera del alfabeto permitido",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A lexical error.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LexError {
    /// Offending fragment as reported (may be empty).
    pub text: String,
    /// Where the erroneous span starts.
    pub position: Position,
    pub kind: LexErrorKind,
    /// Characters consumed by the engine for this error.
    ///
    /// Not always `text`'s length: an unterminated string reports `"` but
    /// consumes through EOF.
    pub len: usize,
}

impl LexError {
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({:?})", self.position, self.kind, self.text)
    }
}

impl std::error::Error for LexError {}
