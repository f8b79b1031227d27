//! Recognizer compilation.
//!
//! A grammar line is compiled in four steps:
//! - header: `Name =` and an optional trailing `;`
//! - `alternatives`: split the body at top-level alternators
//! - `recursion`: reject alternatives that start with a self-reference
//! - `compiler`: build symbols, compiling groups recursively under the rule's name

mod alternatives;
mod compiler;
mod recursion;


pub use alternatives::split_alternatives;
pub use compiler::Compiler;
pub use recursion::is_left_recursive;

use oddgen_core::LineIndex;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::{CompileError, Location};
use crate::meta::{self, GrammarToken, MetaKind, Origin};
use crate::symbol::Recognizer;

/// Lex and compile one grammar line located at `origin`.
///
/// Warnings go to `diagnostics`; the first error aborts compilation.
pub fn compile_line(
    text: &str,
    origin: Origin,
    diagnostics: &mut Diagnostics,
) -> Result<Recognizer, CompileError> {
    let tokens = meta::lex_at(text, origin);
    let end = end_of_line(text, origin);
    compile_tokens(&tokens, end, diagnostics)
}

/// Compile an already lexed grammar line. `end` locates errors about
/// tokens missing at the end of the line.
pub fn compile_tokens(
    tokens: &[GrammarToken],
    end: Location,
    diagnostics: &mut Diagnostics,
) -> Result<Recognizer, CompileError> {
    if let Some(garbage) = tokens
        .iter()
        .find(|t| t.kind == MetaKind::UnexpectedFragment)
    {
        return Err(CompileError::syntax(
            DiagnosticKind::UnexpectedCharacters,
            Some(format!("`{}`", garbage.text)),
            garbage.into(),
        ));
    }

    let (name, body) = split_header(tokens, end)?;
    let body = match body.split_last() {
        Some((last, rest)) if last.kind == MetaKind::Terminator => rest,
        _ => body,
    };

    Compiler::new(name, diagnostics).compile(body)
}

fn split_header(
    tokens: &[GrammarToken],
    end: Location,
) -> Result<(&GrammarToken, &[GrammarToken]), CompileError> {
    let name = match tokens.first() {
        Some(token) if token.kind == MetaKind::Name => token,
        Some(token) => {
            return Err(CompileError::syntax(
                DiagnosticKind::ExpectedRuleName,
                Some(format!("found {}", token.kind.describe())),
                token.into(),
            ));
        }
        None => return Err(CompileError::syntax(DiagnosticKind::ExpectedRuleName, None, end)),
    };

    match tokens.get(1) {
        Some(token) if token.kind == MetaKind::Assignment => Ok((name, &tokens[2..])),
        Some(token) => Err(CompileError::syntax(
            DiagnosticKind::ExpectedAssignment,
            Some(format!("found {}", token.kind.describe())),
            token.into(),
        )),
        None => Err(CompileError::syntax(
            DiagnosticKind::ExpectedAssignment,
            None,
            end,
        )),
    }
}

fn end_of_line(text: &str, origin: Origin) -> Location {
    let position = LineIndex::new(text).position(text.len());
    let column = if position.line == 1 {
        position.column + origin.column - 1
    } else {
        position.column
    };
    let offset = origin.offset + text.len();
    Location::new(offset..offset, position.line + origin.line - 1, column)
}
