//! Test helpers: a small program lexer and a grammar builder.

use oddgen_compiler::{Grammar, Namespace};
use oddgen_core::{Lexer, Token};

/// Lexer for a small expression language.
pub fn lexer() -> Lexer {
    Lexer::builder()
        .skip("whitespace", r"\s+")
        .token("operator", r"[+\-*/=<>]")
        .token("interpunction", r"[(){}\[\],;]")
        .token("number", r"[0-9]+")
        .token("identifier", r"[a-zA-Z][a-zA-Z-]*")
        .build()
        .unwrap()
}

pub fn lex(source: &str) -> Vec<Token> {
    lexer().lex(source).unwrap()
}

/// Build a grammar from `ignore|define|rule <line>` statements, one per line.
pub fn grammar(source: &str) -> Grammar {
    let mut grammar = Grammar::new();
    for line in source.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (keyword, rest) = line.split_once(' ').unwrap_or((line, ""));
        let namespace = Namespace::from_keyword(keyword)
            .unwrap_or_else(|| panic!("unknown statement keyword `{keyword}`"));
        if let Err(err) = grammar.define(namespace, rest) {
            panic!("expected `{line}` to compile, got: {err}");
        }
    }
    grammar
}
