//! Errors that can occur while matching program tokens.

use oddgen_compiler::Namespace;
use oddgen_core::{Position, Token};

/// Deepest position at which a literal or class expectation failed.
///
/// Only collected when the VM is built with `track_furthest(true)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FurthestFailure {
    /// Index into the program tokens.
    pub offset: usize,
    /// Rule that was being tried when the expectation failed first.
    pub rule: String,
    /// Everything expected at `offset`, in the order first attempted.
    pub expected: Vec<String>,
    /// Token at `offset`; `None` at end of input.
    pub found: Option<Token>,
}

impl std::fmt::Display for FurthestFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected {}", self.expected.join(" or "))?;
        match &self.found {
            Some(token) => write!(
                f,
                ", found {} {:?} at {}",
                token.kind,
                token.lexeme,
                Position::new(token.line, token.column)
            )?,
            None => write!(f, ", found end of input")?,
        }
        write!(f, " (while trying `{}`)", self.rule)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A reference names nothing in its namespace. Reported when first reached.
    #[error("undefined {} `{name}`", .namespace.noun())]
    UndefinedRule { namespace: Namespace, name: String },

    /// Execution reached a symbol that has no meaning at its position.
    #[error("unsupported symbol `{lexeme}` in rule `{rule}` at line {line}, column {column}")]
    UnsupportedSymbol {
        rule: String,
        lexeme: String,
        line: u32,
        column: u32,
    },

    /// No rule advanced at this token.
    #[error("unexpected {kind} {lexeme:?} at line {line}, column {column}")]
    UnexpectedToken {
        kind: String,
        lexeme: String,
        line: u32,
        column: u32,
        furthest: Option<Box<FurthestFailure>>,
    },

    /// Recursion fuel exhausted (too many nested recognizer invocations).
    #[error("runtime recursion limit exceeded ({0} nested invocations)")]
    RecursionLimitExceeded(u32),

    /// Execution fuel exhausted (too many matching steps).
    #[error("runtime execution limit exceeded ({0} steps)")]
    ExecFuelExhausted(u32),
}

impl RuntimeError {
    pub(crate) fn unexpected(token: &Token, furthest: Option<FurthestFailure>) -> Self {
        Self::UnexpectedToken {
            kind: token.kind.clone(),
            lexeme: token.lexeme.clone(),
            line: token.line,
            column: token.column,
            furthest: furthest.map(Box::new),
        }
    }

    /// Whether this error comes from a resource limit rather than the input.
    pub fn is_limit(&self) -> bool {
        matches!(
            self,
            Self::RecursionLimitExceeded(_) | Self::ExecFuelExhausted(_)
        )
    }

    /// Furthest-failure report, when tracking was enabled.
    pub fn furthest(&self) -> Option<&FurthestFailure> {
        match self {
            Self::UnexpectedToken { furthest, .. } => furthest.as_deref(),
            _ => None,
        }
    }
}
