#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for oddgen.
//!
//! - [`Token`]: a classified program token, the unit the recognizers consume
//! - [`LineIndex`]: byte offset → 1-based line/column conversion
//! - [`Lexer`]: regex-classification tokenizer for program text
//! - [`Colors`]: ANSI palette shared by the tracer and the CLI

pub mod colors;
pub mod lexer;
pub mod position;
pub mod utils;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod lib_tests;
#[cfg(test)]
mod position_tests;

use serde::{Deserialize, Serialize};

pub use colors::Colors;
pub use lexer::{LexError, Lexer, LexerBuilder};
pub use position::{LineIndex, Position};

/// A classified token of program text.
///
/// Tokens are produced by a tokenizer outside the recognizers and are never
/// mutated by them. `kind` is the token class matched by class references,
/// `lexeme` the exact text matched by literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: String,
    pub lexeme: String,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
    /// Byte offset into the program text.
    #[serde(default)]
    pub offset: usize,
}

impl Token {
    pub fn new(
        kind: impl Into<String>,
        lexeme: impl Into<String>,
        line: u32,
        column: u32,
        offset: usize,
    ) -> Self {
        Self {
            kind: kind.into(),
            lexeme: lexeme.into(),
            line,
            column,
            offset,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.lexeme)
    }
}

/// Parse a JSON array of tokens produced by an external tokenizer.
pub fn parse_tokens(json: &str) -> Result<Vec<Token>, serde_json::Error> {
    serde_json::from_str(json)
}
