//! Ordered-choice backtracking over compiled recognizers.
//!
//! Every invocation works on absolute token offsets into the program. An
//! alternative keeps a local cursor; when one of its symbols fails, the
//! alternative's contributions are dropped and the next alternative starts
//! from the invocation offset again. Failing to match is never an error.
//!
//! Nested invocations are frames on an explicit stack rather than native
//! calls, so deep grammars hit the recursion limit instead of the thread's
//! stack size.

use oddgen_compiler::{Namespace, Recognizer, Symbol};
use oddgen_core::Token;

use super::error::{FurthestFailure, RuntimeError};
use super::frame::Frame;
use super::trace::Tracer;
use super::value::{Match, Node, Subtree};
use super::vm::VM;

/// State of one run: remaining fuel and furthest failure.
pub(crate) struct Execution<'v, 'g, 't, T: Tracer> {
    vm: &'v VM<'g>,
    tokens: &'t [Token],
    tracer: &'v mut T,
    exec_fuel: u32,
    furthest: Option<FurthestFailure>,
}

/// Outcome of running one symbol of the top frame.
enum Step<'g> {
    Continue,
    Failed,
    Call(&'g Recognizer),
    Matched,
    Exhausted,
}

impl<'v, 'g, 't, T: Tracer> Execution<'v, 'g, 't, T> {
    pub(crate) fn new(vm: &'v VM<'g>, tokens: &'t [Token], tracer: &'v mut T) -> Self {
        Self {
            vm,
            tokens,
            tracer,
            exec_fuel: vm.limits.exec_fuel,
            furthest: None,
        }
    }

    pub(crate) fn tracer(&mut self) -> &mut T {
        &mut *self.tracer
    }

    pub(crate) fn take_furthest(&mut self) -> Option<FurthestFailure> {
        self.furthest.take()
    }

    /// Run `recognizer` at token offset `start`.
    pub(crate) fn invoke(
        &mut self,
        recognizer: &'g Recognizer,
        start: usize,
    ) -> Result<Match, RuntimeError> {
        let mut frames = Vec::new();
        frames.push(self.enter(recognizer, start, 0)?);

        loop {
            let top = frames.len() - 1;
            let result = match self.step(&mut frames[top])? {
                Step::Continue => continue,
                Step::Failed => {
                    self.backtrack(&mut frames[top]);
                    continue;
                }
                Step::Call(callee) => {
                    let frame = self.enter(callee, frames[top].cursor, frames.len())?;
                    frames.push(frame);
                    continue;
                }
                Step::Matched => frames[top].finish(),
                Step::Exhausted => Match::NoMatch,
            };

            let rule = frames[top].rule();
            frames.truncate(top);
            self.tracer.trace_exit(rule, &result);

            let Some(caller) = frames.last_mut() else {
                return Ok(result);
            };
            self.resume(caller, result);
        }
    }

    /// Open a frame for `recognizer`; `depth` is the number of frames below it.
    fn enter(
        &mut self,
        recognizer: &'g Recognizer,
        start: usize,
        depth: usize,
    ) -> Result<Frame<'g>, RuntimeError> {
        let limit = self.vm.limits.recursion_limit;
        if depth >= limit as usize {
            return Err(RuntimeError::RecursionLimitExceeded(limit));
        }
        self.consume_fuel()?;

        self.tracer.trace_enter(recognizer.name(), start);
        if !recognizer.alternatives().is_empty() {
            self.tracer.trace_alternative(recognizer.name(), 0);
        }
        Ok(Frame::new(recognizer, start))
    }

    fn backtrack(&mut self, frame: &mut Frame<'g>) {
        let rule = frame.rule();
        self.tracer.trace_backtrack(rule, frame.alternative);
        frame.next_alternative();
        if frame.symbols().is_some() {
            self.tracer.trace_alternative(rule, frame.alternative);
        }
    }

    /// Hand a finished callee's result to the frame that invoked it.
    fn resume(&mut self, frame: &mut Frame<'g>, result: Match) {
        match result {
            Match::NoMatch => self.backtrack(frame),
            Match::Matched { width, nodes } => {
                let name = match frame.current() {
                    Some(Symbol::Subrule(name) | Symbol::Definition(name)) => Some(name.clone()),
                    _ => None,
                };
                frame.accept([Node::Tree(Subtree::new(name, width, nodes))], width);
            }
        }
    }

    /// Run the next symbol of `frame`'s current alternative.
    fn step(&mut self, frame: &mut Frame<'g>) -> Result<Step<'g>, RuntimeError> {
        let Some(symbols) = frame.symbols() else {
            return Ok(Step::Exhausted);
        };
        let Some(symbol) = symbols.get(frame.symbol) else {
            return Ok(Step::Matched);
        };
        self.consume_fuel()?;

        let tokens = self.tokens;
        let rule = frame.rule();
        let cursor = frame.cursor;

        match symbol {
            Symbol::Literal(text) => match tokens.get(cursor) {
                Some(token) if token.lexeme == *text => {
                    self.tracer.trace_literal_success(token);
                    frame.accept([Node::Token(token.clone())], 1);
                    Ok(Step::Continue)
                }
                found => {
                    self.tracer.trace_literal_failure(text, found);
                    self.record_failure(cursor, rule, || format!("{text:?}"));
                    Ok(Step::Failed)
                }
            },
            Symbol::Class {
                name, quantifier, ..
            } => {
                let run = &tokens[cursor.min(tokens.len())..];
                let count = run
                    .iter()
                    .take_while(|t| t.kind == *name)
                    .take(quantifier.max().unwrap_or(usize::MAX))
                    .count();

                if count < quantifier.min() {
                    self.tracer.trace_class_failure(name, count, quantifier.min());
                    self.record_failure(cursor + count, rule, || {
                        oddgen_core::utils::with_indefinite_article(name)
                    });
                    return Ok(Step::Failed);
                }

                self.tracer.trace_class_success(name, count);
                frame.accept(run[..count].iter().cloned().map(Node::Token), count);
                Ok(Step::Continue)
            }
            Symbol::Subrule(name) => self.resolve(Namespace::Rules, name).map(Step::Call),
            Symbol::Definition(name) => self.resolve(Namespace::Definitions, name).map(Step::Call),
            Symbol::Group(group) => Ok(Step::Call(group)),
            Symbol::Stray(token) => Err(RuntimeError::UnsupportedSymbol {
                rule: rule.to_string(),
                lexeme: token.text.clone(),
                line: token.line,
                column: token.column,
            }),
        }
    }

    fn resolve(&self, namespace: Namespace, name: &str) -> Result<&'g Recognizer, RuntimeError> {
        self.vm
            .grammar
            .lookup(namespace, name)
            .ok_or_else(|| RuntimeError::UndefinedRule {
                namespace,
                name: name.to_string(),
            })
    }

    fn consume_fuel(&mut self) -> Result<(), RuntimeError> {
        if self.exec_fuel == 0 {
            return Err(RuntimeError::ExecFuelExhausted(self.vm.limits.exec_fuel));
        }
        self.exec_fuel -= 1;
        Ok(())
    }

    fn record_failure(&mut self, offset: usize, rule: &str, expected: impl FnOnce() -> String) {
        if !self.vm.track_furthest {
            return;
        }

        let replace = match &self.furthest {
            None => true,
            Some(furthest) => offset > furthest.offset,
        };
        if replace {
            self.furthest = Some(FurthestFailure {
                offset,
                rule: rule.to_string(),
                expected: vec![expected()],
                found: self.tokens.get(offset).cloned(),
            });
            return;
        }

        if let Some(furthest) = &mut self.furthest
            && furthest.offset == offset
        {
            let expected = expected();
            if !furthest.expected.contains(&expected) {
                furthest.expected.push(expected);
            }
        }
    }
}
