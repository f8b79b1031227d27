//! Test helpers shared by the compiler's unit tests.

use crate::diagnostics::Diagnostics;
use crate::error::CompileError;
use crate::grammar::{Grammar, Namespace};
use crate::meta::Origin;
use crate::symbol::Recognizer;

/// Compile a single line, panicking on error.
pub fn compile_ok(text: &str) -> Recognizer {
    let mut diagnostics = Diagnostics::new();
    match crate::compile::compile_line(text, Origin::default(), &mut diagnostics) {
        Ok(recognizer) => recognizer,
        Err(err) => panic!("expected `{text}` to compile, got: {err}"),
    }
}

/// Compile a single line, returning the recognizer and its warnings.
pub fn compile_with_warnings(text: &str) -> (Recognizer, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    match crate::compile::compile_line(text, Origin::default(), &mut diagnostics) {
        Ok(recognizer) => (recognizer, diagnostics),
        Err(err) => panic!("expected `{text}` to compile, got: {err}"),
    }
}

/// Compile a single line, panicking if it succeeds.
pub fn compile_err(text: &str) -> CompileError {
    let mut diagnostics = Diagnostics::new();
    match crate::compile::compile_line(text, Origin::default(), &mut diagnostics) {
        Ok(recognizer) => panic!("expected `{text}` to fail, compiled to: {recognizer}"),
        Err(err) => err,
    }
}

/// Build a grammar from `keyword line` statements, one per line.
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
