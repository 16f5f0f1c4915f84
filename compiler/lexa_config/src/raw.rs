//! Unvalidated, serializable form of a configuration.
//!
//! This mirrors the JSON configuration file:
//!
//! ```json
//! {
//!   "palabrasReservadas": ["si", "mientras"],
//!   "operadores": ["+", "==", "="],
//!   "puntuacion": [";", ","],
//!   "agrupacion": ["(", ")"],
//!   "comentarios": { "linea": "//", "bloqueInicio": "/*", "bloqueFin": "*/" }
//! }
//! ```
//!
//! Missing keys deserialize as empty / absent and are reported by
//! [`LexerConfig::from_raw`](crate::LexerConfig::from_raw).

/// Configuration exactly as read, before trimming and validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawConfig {
    #[cfg_attr(feature = "serde", serde(rename = "palabrasReservadas"))]
    pub reserved_words: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "operadores"))]
    pub operators: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "puntuacion"))]
    pub punctuation: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "agrupacion"))]
    pub grouping: Vec<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "comentarios", skip_serializing_if = "Option::is_none")
    )]
    pub comments: Option<RawComments>,
}

/// The `comentarios` object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawComments {
    #[cfg_attr(feature = "serde", serde(rename = "linea"))]
    pub line: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "bloqueInicio"))]
    pub block_start: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "bloqueFin"))]
    pub block_end: Option<String>,
}
