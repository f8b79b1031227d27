//! Match engine for compiled oddgen grammars.
//!
//! This crate provides the backtracking VM that runs recognizers over a
//! program token stream, and the driver that turns a whole program into a
//! flat [`ProgramTree`].

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

#[cfg(test)]
mod test_utils;

// Re-export commonly used items at crate root
pub use engine::{
    FuelLimits, FurthestFailure, Match, Node, NoopTracer, PrintTracer, ProgramTree, RuntimeError,
    Subtree, Tracer, VM, VMBuilder, Verbosity,
};
