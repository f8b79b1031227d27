//! Meta lexer for grammar lines.
//!
//! Turns the text of one grammar line into [`GrammarToken`]s. Trivia
//! (whitespace and `//` comments) is dropped. Runs of characters the lexer
//! cannot classify are coalesced into a single `UnexpectedFragment` token so
//! the compiler reports one error per garbage run, not one per character.

use std::ops::Range;

use logos::Logos;
use oddgen_core::LineIndex;

/// Token kinds of the grammar notation.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKind {
    #[token("=")]
    Assignment,

    #[token(";")]
    Terminator,

    #[token("(")]
    GroupOpen,

    #[token(")")]
    GroupClose,

    #[token("|")]
    #[token("or")]
    Alternator,

    #[token("?")]
    Optional,

    #[token("*")]
    ZeroOrMore,

    #[token("+")]
    OneOrMore,

    /// `"text"`, with `\"` and `\\` escapes.
    #[regex(r#""([^"\\]|\\["\\])*""#)]
    Literal,

    /// `.name`: token class.
    #[regex(r"\.[A-Za-z_][A-Za-z0-9_-]*")]
    ClassRef,

    /// `@name`: rule.
    #[regex(r"@[A-Za-z_][A-Za-z0-9_-]*")]
    SubruleRef,

    /// `#name`: definition.
    #[regex(r"#[A-Za-z_][A-Za-z0-9_-]*")]
    DefinitionRef,

    /// `~name`: ignoration. Never legal inside a rule body.
    #[regex(r"~[A-Za-z_][A-Za-z0-9_-]*")]
    IgnorationRef,

    #[regex(r"[A-Za-z_][A-Za-z0-9_-]*")]
    Name,

    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    /// Coalesced run of unlexable characters. Produced by [`lex`], never by logos.
    UnexpectedFragment,
}

impl MetaKind {
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::LineComment)
    }

    pub fn is_quantifier(self) -> bool {
        matches!(self, Self::Optional | Self::ZeroOrMore | Self::OneOrMore)
    }

    /// Human-readable name used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Assignment => "`=`",
            Self::Terminator => "`;`",
            Self::GroupOpen => "`(`",
            Self::GroupClose => "`)`",
            Self::Alternator => "alternator",
            Self::Optional => "`?`",
            Self::ZeroOrMore => "`*`",
            Self::OneOrMore => "`+`",
            Self::Literal => "literal",
            Self::ClassRef => "class reference",
            Self::SubruleRef => "subrule reference",
            Self::DefinitionRef => "definition reference",
            Self::IgnorationRef => "ignoration reference",
            Self::Name => "name",
            Self::Whitespace => "whitespace",
            Self::LineComment => "comment",
            Self::UnexpectedFragment => "unexpected characters",
        }
    }
}

/// Where a grammar line starts inside a larger text (a grammar file).
///
/// Spans and positions of lexed tokens are shifted by this origin so that
/// diagnostics point into the enclosing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Default for Origin {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Origin {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

/// A lexed token of a grammar line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GrammarToken {
    pub kind: MetaKind,
    /// Source text of the token, including sigils and quotes.
    pub text: String,
    /// Byte span, relative to the [`Origin`] the line was lexed at.
    pub span: Range<usize>,
    pub line: u32,
    pub column: u32,
}

impl GrammarToken {
    /// The referenced name, without its sigil. Bare names are returned as-is.
    pub fn name(&self) -> &str {
        match self.kind {
            MetaKind::ClassRef
            | MetaKind::SubruleRef
            | MetaKind::DefinitionRef
            | MetaKind::IgnorationRef => &self.text[1..],
            _ => &self.text,
        }
    }

    /// Unquoted, unescaped text of a literal token.
    pub fn literal_value(&self) -> String {
        let inner = self
            .text
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(&self.text);

        let mut value = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == '\\'
                && let Some(escaped) = chars.next()
            {
                value.push(escaped);
                continue;
            }
            value.push(c);
        }
        value
    }
}

impl std::fmt::Display for GrammarToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} {:?}", self.kind, self.text)
    }
}

/// Lex a grammar line that starts at the beginning of its own text.
pub fn lex(text: &str) -> Vec<GrammarToken> {
    lex_at(text, Origin::default())
}

/// Lex a grammar line located at `origin` inside an enclosing text.
pub fn lex_at(text: &str, origin: Origin) -> Vec<GrammarToken> {
    let index = LineIndex::new(text);
    let mut tokens = Vec::new();
    let mut lexer = MetaKind::lexer(text);
    let mut error_start: Option<usize> = None;

    let mut push = |kind: MetaKind, span: Range<usize>| {
        let position = index.position(span.start);
        let column = if position.line == 1 {
            position.column + origin.column - 1
        } else {
            position.column
        };
        tokens.push(GrammarToken {
            kind,
            text: text[span.clone()].to_string(),
            span: span.start + origin.offset..span.end + origin.offset,
            line: position.line + origin.line - 1,
            column,
        });
    };

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    push(MetaKind::UnexpectedFragment, start..lexer.span().start);
                }
                if !kind.is_trivia() {
                    push(kind, lexer.span());
                }
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    push(MetaKind::UnexpectedFragment, start..text.len());
                }
                break;
            }
        }
    }

    tokens
}
