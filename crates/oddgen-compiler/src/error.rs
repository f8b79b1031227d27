use std::ops::Range;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::meta::GrammarToken;

/// Span and 1-based position of the text an error points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub span: Range<usize>,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(span: Range<usize>, line: u32, column: u32) -> Self {
        Self { span, line, column }
    }
}

impl From<&GrammarToken> for Location {
    fn from(token: &GrammarToken) -> Self {
        Self::new(token.span.clone(), token.line, token.column)
    }
}

/// Fatal error compiling one grammar line. Nothing is stored when it occurs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("{message} at line {}, column {}", .at.line, .at.column)]
    GrammarSyntax {
        kind: DiagnosticKind,
        message: String,
        detail: Option<String>,
        at: Location,
    },

    #[error("rule `{rule}` is left-recursive at line {}, column {}", .at.line, .at.column)]
    LeftRecursion {
        rule: String,
        at: Location,
        /// The rule name in the header.
        declared: Location,
    },

    #[error(
        "ignoration `{name}` cannot be referenced in rule `{rule}` at line {}, column {}",
        .at.line,
        .at.column
    )]
    IllegalIgnorationReference {
        name: String,
        rule: String,
        at: Location,
    },

    #[error(
        "group opened at line {}, column {} in rule `{rule}` is never closed",
        .at.line,
        .at.column
    )]
    UnclosedGroup { rule: String, at: Location },
}

impl CompileError {
    pub(crate) fn syntax(kind: DiagnosticKind, detail: Option<String>, at: Location) -> Self {
        Self::GrammarSyntax {
            kind,
            message: kind.message(detail.as_deref()),
            detail,
            at,
        }
    }

    pub fn location(&self) -> &Location {
        match self {
            Self::GrammarSyntax { at, .. }
            | Self::LeftRecursion { at, .. }
            | Self::IllegalIgnorationReference { at, .. }
            | Self::UnclosedGroup { at, .. } => at,
        }
    }

    pub fn diagnostic_kind(&self) -> DiagnosticKind {
        match self {
            Self::GrammarSyntax { kind, .. } => *kind,
            Self::LeftRecursion { .. } => DiagnosticKind::LeftRecursion,
            Self::IllegalIgnorationReference { .. } => DiagnosticKind::IllegalIgnorationReference,
            Self::UnclosedGroup { .. } => DiagnosticKind::UnclosedGroup,
        }
    }

    /// Record this error as a diagnostic, pointing at its span.
    pub fn report(&self, diagnostics: &mut Diagnostics) {
        let kind = self.diagnostic_kind();
        let span = self.location().span.clone();
        let builder = diagnostics.report(kind, span);
        match self {
            Self::GrammarSyntax { detail: None, .. } => builder,
            Self::GrammarSyntax {
                detail: Some(detail),
                ..
            } => builder.message(detail.clone()),
            Self::LeftRecursion { rule, declared, .. } => builder
                .message(rule.clone())
                .related_to("rule declared here", declared.span.clone()),
            Self::IllegalIgnorationReference { name, .. } => builder.message(name.clone()),
            Self::UnclosedGroup { rule, .. } => builder.message(format!("group in rule `{rule}`")),
        }
        .emit();
    }

    pub fn to_diagnostics(&self) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        self.report(&mut diagnostics);
        diagnostics
    }
}
