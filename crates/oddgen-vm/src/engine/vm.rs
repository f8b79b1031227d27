//! Virtual machine for running compiled grammars against program tokens.

use oddgen_compiler::{Grammar, Namespace};
use oddgen_core::Token;

use super::error::RuntimeError;
use super::exec::Execution;
use super::trace::{NoopTracer, Tracer};
use super::value::Match;

/// Runtime limits for matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FuelLimits {
    /// Maximum total matching steps (default: 1,000,000).
    pub(crate) exec_fuel: u32,
    /// Maximum recognizer nesting (default: 1,024).
    pub(crate) recursion_limit: u32,
}

impl Default for FuelLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
            recursion_limit: 1024,
        }
    }
}

impl FuelLimits {
    /// Create new fuel limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn get_exec_fuel(&self) -> u32 {
        self.exec_fuel
    }
    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }
}

/// Matches program tokens against a compiled [`Grammar`].
///
/// The VM only reads the grammar. References are resolved by name at the
/// moment they are reached, so forward references work and a missing name
/// is reported only if execution gets there.
pub struct VM<'g> {
    pub(crate) grammar: &'g Grammar,
    pub(crate) limits: FuelLimits,
    pub(crate) track_furthest: bool,
}

/// Builder for VM instances.
pub struct VMBuilder<'g> {
    grammar: &'g Grammar,
    limits: FuelLimits,
    track_furthest: bool,
}

impl<'g> VMBuilder<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            limits: FuelLimits::default(),
            track_furthest: false,
        }
    }

    /// Set the fuel limits.
    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.limits = self.limits.recursion_limit(limit);
        self
    }

    /// Record the furthest failed expectation and attach it to `UnexpectedToken`.
    pub fn track_furthest(mut self, enabled: bool) -> Self {
        self.track_furthest = enabled;
        self
    }

    pub fn build(self) -> VM<'g> {
        VM {
            grammar: self.grammar,
            limits: self.limits,
            track_furthest: self.track_furthest,
        }
    }
}

impl<'g> VM<'g> {
    /// Create a VM builder.
    pub fn builder(grammar: &'g Grammar) -> VMBuilder<'g> {
        VMBuilder::new(grammar)
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn limits(&self) -> FuelLimits {
        self.limits
    }

    /// Invoke the recognizer `name` of `namespace` at the start of `tokens`.
    ///
    /// A prefix match is a success; `NoMatch` is a normal outcome, not an error.
    pub fn recognize(
        &self,
        namespace: Namespace,
        name: &str,
        tokens: &[Token],
    ) -> Result<Match, RuntimeError> {
        self.recognize_with(namespace, name, tokens, &mut NoopTracer)
    }

    /// Like [`VM::recognize`], reporting execution to `tracer`.
    pub fn recognize_with<T: Tracer>(
        &self,
        namespace: Namespace,
        name: &str,
        tokens: &[Token],
        tracer: &mut T,
    ) -> Result<Match, RuntimeError> {
        let recognizer =
            self.grammar
                .lookup(namespace, name)
                .ok_or_else(|| RuntimeError::UndefinedRule {
                    namespace,
                    name: name.to_string(),
                })?;

        Execution::new(self, tokens, tracer).invoke(recognizer, 0)
    }
}
