//! Regex-classification tokenizer for program text.
//!
//! A lexer is an ordered list of named rules. At every position the first
//! rule (in declaration order) with a non-empty anchored match wins; its text
//! becomes a [`Token`] of that rule's kind, unless the rule is a skip rule,
//! in which case the text is dropped. Patterns are compiled to dense DFAs
//! once, at build time.

use indexmap::IndexMap;
use regex_automata::dfa::{Automaton, StartKind, dense};
use regex_automata::{Anchored, Input};

use crate::Token;
use crate::position::LineIndex;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("invalid pattern for token `{name}`: {message}")]
    InvalidPattern { name: String, message: String },

    #[error("unexpected character {found:?} at line {line}, column {column}")]
    UnexpectedCharacter {
        found: char,
        line: u32,
        column: u32,
        offset: usize,
    },

    #[error("pattern for token `{name}` cannot be searched: {message}")]
    Search { name: String, message: String },
}

#[derive(Debug, Clone)]
struct RuleSpec {
    pattern: String,
    skip: bool,
}

#[derive(Debug)]
struct LexRule {
    name: String,
    skip: bool,
    dfa: dense::DFA<Vec<u32>>,
}

/// Builder for [`Lexer`].
///
/// Declaring a name twice replaces the earlier pattern but keeps its
/// position in the rule order.
#[derive(Debug, Clone, Default)]
pub struct LexerBuilder {
    rules: IndexMap<String, RuleSpec>,
}

impl LexerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule whose matches become tokens of kind `name`.
    pub fn token(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.push(name.into(), pattern.into(), false);
        self
    }

    /// Add a rule whose matches are consumed and dropped (whitespace, comments).
    pub fn skip(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.push(name.into(), pattern.into(), true);
        self
    }

    pub fn push(&mut self, name: String, pattern: String, skip: bool) {
        self.rules.insert(name, RuleSpec { pattern, skip });
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Compile every pattern. Fails on the first pattern that does not build.
    pub fn build(self) -> Result<Lexer, LexError> {
        let mut rules = Vec::with_capacity(self.rules.len());
        for (name, spec) in self.rules {
            let dfa = dense::DFA::builder()
                .configure(dense::DFA::config().start_kind(StartKind::Anchored))
                .build(&spec.pattern)
                .map_err(|e| LexError::InvalidPattern {
                    name: name.clone(),
                    message: e.to_string(),
                })?;
            rules.push(LexRule {
                name,
                skip: spec.skip,
                dfa,
            });
        }
        Ok(Lexer { rules })
    }
}

/// Compiled program tokenizer.
#[derive(Debug)]
pub struct Lexer {
    rules: Vec<LexRule>,
}

impl Lexer {
    pub fn builder() -> LexerBuilder {
        LexerBuilder::new()
    }

    /// Rule names in declaration order.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    /// Tokenize `source`. Skip rules are matched but produce no tokens.
    pub fn lex(&self, source: &str) -> Result<Vec<Token>, LexError> {
        let index = LineIndex::new(source);
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < source.len() {
            let Some((rule, end)) = self.first_rule_at(source, pos)? else {
                let position = index.position(pos);
                let found = source[pos..].chars().next().unwrap_or('\0');
                return Err(LexError::UnexpectedCharacter {
                    found,
                    line: position.line,
                    column: position.column,
                    offset: pos,
                });
            };

            if !rule.skip {
                let position = index.position(pos);
                tokens.push(Token::new(
                    rule.name.as_str(),
                    &source[pos..end],
                    position.line,
                    position.column,
                    pos,
                ));
            }
            pos = end;
        }

        Ok(tokens)
    }

    /// First rule in declaration order that matches a non-empty prefix at `pos`.
    fn first_rule_at(
        &self,
        source: &str,
        pos: usize,
    ) -> Result<Option<(&LexRule, usize)>, LexError> {
        for rule in &self.rules {
            let input = Input::new(source).range(pos..).anchored(Anchored::Yes);
            let found = rule
                .dfa
                .try_search_fwd(&input)
                .map_err(|e| LexError::Search {
                    name: rule.name.clone(),
                    message: e.to_string(),
                })?;

            if let Some(half) = found
                && half.offset() > pos
                && source.is_char_boundary(half.offset())
            {
                return Ok(Some((rule, half.offset())));
            }
        }
        Ok(None)
    }
}
