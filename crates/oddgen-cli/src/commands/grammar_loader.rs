//! Grammar files.
//!
//! One statement per line:
//!
//! ```text
//! token number /[0-9]+/
//! skip whitespace /\s+/
//! rule sum = @number "+" @number;
//! ```
//!
//! `token`/`skip` lines declare the program lexer in priority order;
//! `ignore`, `define` and `rule` lines are compiled into the matching
//! namespace. Blank lines and lines starting with `//` are ignored. Every
//! statement is processed even after an error, so one run reports all of them.

use std::ops::Range;

use oddgen_compiler::{DiagnosticKind, Diagnostics, Grammar, Namespace, Origin};
use oddgen_core::{LexError, Lexer, LexerBuilder, LineIndex};

/// A grammar file after every statement has been processed.
pub struct GrammarFile {
    pub grammar: Grammar,
    /// `None` when the file declares no `token` or `skip` rules.
    pub lexer: Option<Lexer>,
    /// Statement errors, then the grammar's compile warnings.
    pub diagnostics: Diagnostics,
}

impl GrammarFile {
    pub fn parse(source: &str) -> Self {
        let mut loader = Loader {
            index: LineIndex::new(source),
            grammar: Grammar::new(),
            lexer: LexerBuilder::new(),
            diagnostics: Diagnostics::new(),
        };

        let mut line_start = 0;
        for line in source.split_inclusive('\n') {
            let content = line.trim_end_matches(['\n', '\r']);
            loader.statement(content, line_start);
            line_start += line.len();
        }

        loader.finish()
    }

    /// Errors always fail; with `strict`, warnings fail too.
    pub fn is_valid(&self, strict: bool) -> bool {
        !self.diagnostics.has_errors() && !(strict && self.diagnostics.has_warnings())
    }
}

struct Loader<'s> {
    index: LineIndex<'s>,
    grammar: Grammar,
    lexer: LexerBuilder,
    diagnostics: Diagnostics,
}

impl Loader<'_> {
    fn statement(&mut self, line: &str, line_start: usize) {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            return;
        }

        let start = line_start + (line.len() - trimmed.len());
        let (keyword, rest) = split_word(trimmed);
        let rest_start = start + (trimmed.len() - rest.len());
        let line_end = line_start + line.len();

        match keyword {
            "token" => self.lexer_rule(rest, rest_start..line_end, false),
            "skip" => self.lexer_rule(rest, rest_start..line_end, true),
            _ => match Namespace::from_keyword(keyword) {
                Some(namespace) => self.recognizer(namespace, rest, rest_start),
                None => self
                    .diagnostics
                    .report(DiagnosticKind::UnknownStatement, start..start + keyword.len())
                    .message(format!("`{keyword}`"))
                    .emit(),
            },
        }
    }

    fn recognizer(&mut self, namespace: Namespace, text: &str, offset: usize) {
        let position = self.index.position(offset);
        let origin = Origin::new(offset, position.line, position.column);
        if let Err(err) = self.grammar.define_at(namespace, text, origin) {
            err.report(&mut self.diagnostics);
        }
    }

    fn lexer_rule(&mut self, text: &str, range: Range<usize>, skip: bool) {
        let (name, pattern) = match parse_lexer_rule(text) {
            Ok(rule) => rule,
            Err(detail) => {
                self.diagnostics
                    .report(DiagnosticKind::InvalidTokenPattern, range)
                    .message(detail)
                    .emit();
                return;
            }
        };

        // Build the pattern alone so a bad regex is reported on its own line.
        if let Err(LexError::InvalidPattern { message, .. }) =
            Lexer::builder().token(name, pattern).build()
        {
            self.diagnostics
                .report(DiagnosticKind::InvalidTokenPattern, range)
                .message(format!("`{name}`: {message}"))
                .emit();
            return;
        }

        self.lexer.push(name.to_string(), pattern.to_string(), skip);
    }

    fn finish(mut self) -> GrammarFile {
        let lexer = if self.lexer.is_empty() {
            None
        } else {
            match self.lexer.build() {
                Ok(lexer) => Some(lexer),
                Err(err) => {
                    self.diagnostics
                        .report(DiagnosticKind::InvalidTokenPattern, 0..0)
                        .message(err.to_string())
                        .emit();
                    None
                }
            }
        };

        self.diagnostics.extend(self.grammar.diagnostics().clone());

        GrammarFile {
            grammar: self.grammar,
            lexer,
            diagnostics: self.diagnostics,
        }
    }
}

/// Split off the first whitespace-delimited word.
fn split_word(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(end) => (&text[..end], text[end..].trim_start()),
        None => (text, ""),
    }
}

/// `NAME /PATTERN/` → `(NAME, PATTERN)`.
fn parse_lexer_rule(text: &str) -> Result<(&str, &str), String> {
    let (name, rest) = split_word(text);
    if name.is_empty() {
        return Err("missing token name".to_string());
    }

    let rest = rest.trim_end();
    let pattern = rest
        .strip_prefix('/')
        .and_then(|p| p.strip_suffix('/'))
        .ok_or_else(|| format!("expected `/pattern/` after `{name}`"))?;

    if pattern.is_empty() {
        return Err(format!("empty pattern for `{name}`"));
    }

    Ok((name, pattern))
}
