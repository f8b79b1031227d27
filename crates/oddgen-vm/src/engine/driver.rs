//! Top-level parse driver: applies the grammar's rules across a program.

use oddgen_compiler::Recognizer;
use oddgen_core::Token;

use super::error::RuntimeError;
use super::exec::Execution;
use super::trace::{NoopTracer, Tracer};
use super::value::{Match, ProgramTree, Subtree};
use super::vm::VM;

impl<'g> VM<'g> {
    /// Parse a whole program into a flat list of top-level expressions.
    ///
    /// Uses `NoopTracer`, which gets optimized away at compile time.
    pub fn parse_program(&self, tokens: &[Token]) -> Result<ProgramTree, RuntimeError> {
        self.parse_program_with(tokens, &mut NoopTracer)
    }

    /// Parse a program, reporting execution to `tracer`.
    ///
    /// At every offset the rules are tried from the last declared to the
    /// first; the first one that consumes at least one token becomes the
    /// next expression. When none does, the token at that offset is reported.
    pub fn parse_program_with<T: Tracer>(
        &self,
        tokens: &[Token],
        tracer: &mut T,
    ) -> Result<ProgramTree, RuntimeError> {
        let rules: Vec<&'g Recognizer> = self.grammar.rules().rev().collect();
        let mut execution = Execution::new(self, tokens, tracer);
        let mut expressions = Vec::new();
        let mut offset = 0;

        'program: while offset < tokens.len() {
            for &rule in &rules {
                if let Match::Matched { width, nodes } = execution.invoke(rule, offset)?
                    && width > 0
                {
                    execution
                        .tracer()
                        .trace_program_expression(rule.name(), offset, width);
                    expressions.push(Subtree::new(Some(rule.name().to_string()), width, nodes));
                    offset += width;
                    continue 'program;
                }
            }

            return Err(RuntimeError::unexpected(
                &tokens[offset],
                execution.take_furthest(),
            ));
        }

        Ok(ProgramTree::new(expressions))
    }
}
