//! Symbol building for one rule body.

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::{CompileError, Location};
use crate::meta::{GrammarToken, MetaKind};
use crate::symbol::{Alternative, Quantifier, Recognizer, Symbol};

use super::alternatives::split_alternatives;
use super::recursion::is_left_recursive;

/// Compiles rule bodies for the rule `name`.
///
/// Groups are compiled by the same compiler, so they share the rule's name
/// and are subject to the same left recursion check.
pub struct Compiler<'a> {
    name: &'a str,
    /// Where the rule name appears in the header.
    declared: Location,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> Compiler<'a> {
    pub fn new(name: &'a GrammarToken, diagnostics: &'a mut Diagnostics) -> Self {
        Self {
            name: &name.text,
            declared: name.into(),
            diagnostics,
        }
    }

    /// Compile a body (the tokens after `=`, without the terminator).
    pub fn compile(&mut self, body: &[GrammarToken]) -> Result<Recognizer, CompileError> {
        let alternatives = split_alternatives(body);

        for alternative in &alternatives {
            if is_left_recursive(self.name, alternative) {
                return Err(CompileError::LeftRecursion {
                    rule: self.name.to_string(),
                    at: Location::from(&alternative[0]),
                    declared: self.declared.clone(),
                });
            }
        }

        let mut compiled = Vec::with_capacity(alternatives.len());
        for alternative in alternatives {
            compiled.push(self.compile_alternative(alternative)?);
        }

        Ok(Recognizer::new(self.name, compiled))
    }

    fn compile_alternative(&mut self, tokens: &[GrammarToken]) -> Result<Alternative, CompileError> {
        let mut symbols = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];
            i += 1;

            let symbol = match token.kind {
                MetaKind::Literal => Symbol::Literal(token.literal_value()),
                MetaKind::ClassRef | MetaKind::Name => {
                    let quantifier = match tokens.get(i).map(|t| t.kind) {
                        Some(MetaKind::Optional) => Quantifier::Optional,
                        Some(MetaKind::ZeroOrMore) => Quantifier::ZeroOrMore,
                        Some(MetaKind::OneOrMore) => Quantifier::OneOrMore,
                        _ => Quantifier::One,
                    };
                    if quantifier != Quantifier::One {
                        i += 1;
                    }
                    Symbol::Class {
                        name: token.name().to_string(),
                        quantifier,
                        explicit: token.kind == MetaKind::ClassRef,
                    }
                }
                MetaKind::SubruleRef => Symbol::Subrule(token.name().to_string()),
                MetaKind::DefinitionRef => Symbol::Definition(token.name().to_string()),
                MetaKind::IgnorationRef => {
                    return Err(CompileError::IllegalIgnorationReference {
                        name: token.name().to_string(),
                        rule: self.name.to_string(),
                        at: token.into(),
                    });
                }
                MetaKind::GroupOpen => {
                    let close = find_group_close(tokens, i).ok_or_else(|| {
                        CompileError::UnclosedGroup {
                            rule: self.name.to_string(),
                            at: token.into(),
                        }
                    })?;
                    let inner = &tokens[i..close];
                    i = close + 1;

                    if inner.is_empty() {
                        self.diagnostics
                            .report(DiagnosticKind::EmptyGroup, token.span.start..tokens[close].span.end)
                            .emit();
                        continue;
                    }
                    Symbol::Group(self.compile(inner)?)
                }
                MetaKind::GroupClose
                | MetaKind::Alternator
                | MetaKind::Optional
                | MetaKind::ZeroOrMore
                | MetaKind::OneOrMore
                | MetaKind::Assignment
                | MetaKind::Terminator => {
                    let warning = self
                        .diagnostics
                        .report(DiagnosticKind::StraySymbol, token.span.clone())
                        .message(format!("`{}`", token.text));
                    if token.kind.is_quantifier() {
                        warning
                            .hint("quantifiers only apply to class references")
                            .emit();
                    } else {
                        warning.emit();
                    }
                    Symbol::Stray(token.clone())
                }
                MetaKind::UnexpectedFragment => {
                    return Err(CompileError::syntax(
                        DiagnosticKind::UnexpectedCharacters,
                        Some(format!("`{}`", token.text)),
                        token.into(),
                    ));
                }
                MetaKind::Whitespace | MetaKind::LineComment => continue,
            };
            symbols.push(symbol);
        }

        Ok(symbols)
    }
}

/// Index of the `)` closing the group whose contents start at `from`.
fn find_group_close(tokens: &[GrammarToken], from: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (offset, token) in tokens[from..].iter().enumerate() {
        match token.kind {
            MetaKind::GroupOpen => depth += 1,
            MetaKind::GroupClose => {
                depth -= 1;
                if depth == 0 {
                    return Some(from + offset);
                }
            }
            _ => {}
        }
    }
    None
}
