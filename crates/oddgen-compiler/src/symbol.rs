//! Compiled form of a grammar rule.
//!
//! A [`Recognizer`] is immutable once built. References to other rules are
//! kept by name and resolved through the rule table when the recognizer
//! runs, so forward references and later redefinitions are honored.

use crate::meta::GrammarToken;

/// Repetition bounds of a class reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// Exactly one token.
    One,
    /// `?`
    Optional,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
}

impl Quantifier {
    pub fn min(self) -> usize {
        match self {
            Self::One | Self::OneOrMore => 1,
            Self::Optional | Self::ZeroOrMore => 0,
        }
    }

    /// `None` means unbounded.
    pub fn max(self) -> Option<usize> {
        match self {
            Self::One | Self::Optional => Some(1),
            Self::ZeroOrMore | Self::OneOrMore => None,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::One => "",
            Self::Optional => "?",
            Self::ZeroOrMore => "*",
            Self::OneOrMore => "+",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// Matches one token whose lexeme equals the text.
    Literal(String),
    /// Matches a run of tokens of one kind.
    Class {
        name: String,
        quantifier: Quantifier,
        /// Written as `.name` rather than a bare `name`.
        explicit: bool,
    },
    /// Reference into the rules namespace.
    Subrule(String),
    /// Reference into the definitions namespace.
    Definition(String),
    /// Parenthesized alternatives, compiled under the enclosing rule's name.
    Group(Recognizer),
    /// A token with no meaning at its position. Fails execution when reached.
    Stray(GrammarToken),
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "{text:?}"),
            Self::Class {
                name,
                quantifier,
                explicit,
            } => {
                let dot = if *explicit { "." } else { "" };
                write!(f, "{dot}{name}{}", quantifier.suffix())
            }
            Self::Subrule(name) => write!(f, "@{name}"),
            Self::Definition(name) => write!(f, "#{name}"),
            Self::Group(recognizer) => write!(f, "({})", recognizer.body()),
            Self::Stray(token) => write!(f, "!{}", token.text),
        }
    }
}

/// One ordered sequence of symbols; the empty sequence matches zero tokens.
pub type Alternative = Vec<Symbol>;

/// A compiled rule: ordered alternatives tried first to last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognizer {
    name: String,
    alternatives: Vec<Alternative>,
}

impl Recognizer {
    pub fn new(name: impl Into<String>, alternatives: Vec<Alternative>) -> Self {
        Self {
            name: name.into(),
            alternatives,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// The rule body in normalized grammar notation, without the name.
    pub fn body(&self) -> String {
        self.alternatives
            .iter()
            .map(|alt| {
                alt.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl std::fmt::Display for Recognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {};", self.name, self.body())
    }
}
