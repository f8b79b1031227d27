//! Runtime engine for matching program tokens against compiled grammars.
//!
//! The VM walks recognizers directly, with ordered-choice backtracking,
//! producing nested subtrees of the tokens they consumed.

mod driver;
mod error;
mod exec;
mod frame;
mod trace;
mod value;
mod vm;


pub use error::{FurthestFailure, RuntimeError};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use value::{Match, Node, ProgramTree, Subtree};
pub use vm::{FuelLimits, VM, VMBuilder};
