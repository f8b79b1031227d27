//! Tracing infrastructure for debugging recognizer execution.
//!
//! The VM is generic over [`Tracer`]. With [`NoopTracer`] every hook is an
//! empty `#[inline(always)]` function, so tracing compiles away entirely.
//! [`PrintTracer`] collects indented, optionally colored lines.

use oddgen_core::{Colors, Token};

use super::value::Match;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Rule entry/exit and top-level expressions.
    #[default]
    Default,
    /// Verbose (-v): also alternatives and backtracking.
    Verbose,
    /// Very verbose (-vv): also every literal and class attempt.
    VeryVerbose,
}

/// Hooks called by the VM during execution.
///
/// Hooks receive what the VM already has at hand; formatting is up to the
/// implementation.
pub trait Tracer {
    /// Entering a recognizer at token `offset`.
    fn trace_enter(&mut self, rule: &str, offset: usize);

    /// Leaving a recognizer with its result.
    fn trace_exit(&mut self, rule: &str, result: &Match);

    /// Starting alternative `index` of `rule`.
    fn trace_alternative(&mut self, rule: &str, index: usize);

    /// Alternative `index` of `rule` failed; the next one starts from the same offset.
    fn trace_backtrack(&mut self, rule: &str, index: usize);

    fn trace_literal_success(&mut self, token: &Token);

    fn trace_literal_failure(&mut self, expected: &str, found: Option<&Token>);

    /// A class run of `count` tokens was accepted.
    fn trace_class_success(&mut self, class: &str, count: usize);

    /// A class run of `count` tokens was shorter than `min`.
    fn trace_class_failure(&mut self, class: &str, count: usize, min: usize);

    /// The driver accepted a top-level expression.
    fn trace_program_expression(&mut self, rule: &str, offset: usize, width: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _rule: &str, _offset: usize) {}

    #[inline(always)]
    fn trace_exit(&mut self, _rule: &str, _result: &Match) {}

    #[inline(always)]
    fn trace_alternative(&mut self, _rule: &str, _index: usize) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _rule: &str, _index: usize) {}

    #[inline(always)]
    fn trace_literal_success(&mut self, _token: &Token) {}

    #[inline(always)]
    fn trace_literal_failure(&mut self, _expected: &str, _found: Option<&Token>) {}

    #[inline(always)]
    fn trace_class_success(&mut self, _class: &str, _count: usize) {}

    #[inline(always)]
    fn trace_class_failure(&mut self, _class: &str, _count: usize, _min: usize) {}

    #[inline(always)]
    fn trace_program_expression(&mut self, _rule: &str, _offset: usize, _width: usize) {}
}

/// Tracer that collects an execution trace for display.
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
    /// Current recognizer nesting.
    depth: usize,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
            depth: 0,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn push(&mut self, content: String) {
        self.lines
            .push(format!("{:indent$}{content}", "", indent = self.depth * 2));
    }

    fn shows(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }

    fn format_found(&self, found: Option<&Token>) -> String {
        match found {
            Some(token) => format!("{} {:?}", token.kind, token.lexeme),
            None => "end of input".to_string(),
        }
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, rule: &str, offset: usize) {
        let c = self.colors;
        self.push(format!("→ {}{rule}{} {}@{offset}{}", c.blue, c.reset, c.dim, c.reset));
        self.depth += 1;
    }

    fn trace_exit(&mut self, rule: &str, result: &Match) {
        let c = self.colors;
        self.depth = self.depth.saturating_sub(1);
        let outcome = match result.width() {
            Some(width) => format!("{}matched {width}{}", c.green, c.reset),
            None => format!("{}no match{}", c.red, c.reset),
        };
        self.push(format!("← {}{rule}{} {outcome}", c.blue, c.reset));
    }

    fn trace_alternative(&mut self, _rule: &str, index: usize) {
        if !self.shows(Verbosity::Verbose) {
            return;
        }
        let c = self.colors;
        self.push(format!("{}alternative {index}{}", c.dim, c.reset));
    }

    fn trace_backtrack(&mut self, rule: &str, index: usize) {
        if !self.shows(Verbosity::Verbose) {
            return;
        }
        let c = self.colors;
        self.push(format!("{}backtrack {rule} alternative {index}{}", c.dim, c.reset));
    }

    fn trace_literal_success(&mut self, token: &Token) {
        if !self.shows(Verbosity::VeryVerbose) {
            return;
        }
        let c = self.colors;
        self.push(format!(
            "{}✓{} {} {:?}",
            c.green, c.reset, token.kind, token.lexeme
        ));
    }

    fn trace_literal_failure(&mut self, expected: &str, found: Option<&Token>) {
        if !self.shows(Verbosity::VeryVerbose) {
            return;
        }
        let c = self.colors;
        let found = self.format_found(found);
        self.push(format!(
            "{}✗{} expected {expected:?}, found {found}",
            c.red, c.reset
        ));
    }

    fn trace_class_success(&mut self, class: &str, count: usize) {
        if !self.shows(Verbosity::VeryVerbose) {
            return;
        }
        let c = self.colors;
        self.push(format!("{}✓{} .{class} ×{count}", c.green, c.reset));
    }

    fn trace_class_failure(&mut self, class: &str, count: usize, min: usize) {
        if !self.shows(Verbosity::VeryVerbose) {
            return;
        }
        let c = self.colors;
        self.push(format!(
            "{}✗{} .{class} ×{count}, need {min}",
            c.red, c.reset
        ));
    }

    fn trace_program_expression(&mut self, rule: &str, offset: usize, width: usize) {
        let c = self.colors;
        self.push(format!(
            "■ {}{rule}{} {}[{offset}..{}]{}",
            c.blue,
            c.reset,
            c.dim,
            offset + width,
            c.reset
        ));
    }
}
