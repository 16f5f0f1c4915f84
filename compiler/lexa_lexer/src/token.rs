//! Token model.

use std::fmt;

use lexa_core::Position;

/// Lexical category of a token.
///
/// `Comment` and `Error` are never produced by the engine (comments are
/// discarded, errors go to the error list); they exist so that report rows
/// built by callers can share one category type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenType {
    Identifier,
    Number,
    Decimal,
    String,
    ReservedWord,
    Punctuation,
    Operator,
    Grouping,
    Comment,
    Error,
}

impl TokenType {
    /// Every category, in declaration order.
    pub const ALL: [TokenType; 10] = [
        TokenType::Identifier,
        TokenType::Number,
        TokenType::Decimal,
        TokenType::String,
        TokenType::ReservedWord,
        TokenType::Punctuation,
        TokenType::Operator,
        TokenType::Grouping,
        TokenType::Comment,
        TokenType::Error,
    ];

    /// Label shown to users in token tables.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenType::Identifier => "identificador",
            TokenType::Number => "número",
            TokenType::Decimal => "decimal",
            TokenType::String => "cadena",
            TokenType::ReservedWord => "palabra reservada",
            TokenType::Punctuation => "puntuación",
            TokenType::Operator => "operador",
            TokenType::Grouping => "agrupación",
            TokenType::Comment => "comentario",
            TokenType::Error => "error",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified lexeme and where it starts.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenType,
    /// Exact source text.
    pub lexeme: String,
    /// Position of the first character.
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenType, lexeme: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// Length of the lexeme in characters.
    pub fn len(&self) -> usize {
        self.lexeme.chars().count()
    }

    /// Always `false` for tokens produced by the engine.
    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.position, self.kind, self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_are_distinct() {
        let mut names: Vec<_> = TokenType::ALL.iter().map(|t| t.display_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TokenType::ALL.len());
    }

    #[test]
    fn token_len_counts_chars() {
        let token = Token::new(TokenType::String, "\"añ\"", Position::START);
        assert_eq!(token.len(), 4);
        assert!(!token.is_empty());
        assert_eq!(token.to_string(), "1:1 cadena \"\\\"añ\\\"\"");
    }
}
