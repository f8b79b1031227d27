#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! oddgen compiler: grammar lines to recognizers.
//!
//! - `meta` - lexer for the grammar notation
//! - `symbol` - compiled symbols and recognizers
//! - `compile` - recognizer compilation (alternatives, left recursion, groups)
//! - `grammar` - the rule table with its three namespaces
//! - `diagnostics` - warnings and errors rendered against grammar text

pub mod compile;
pub mod diagnostics;
pub mod error;
pub mod grammar;
pub mod meta;
pub mod symbol;

#[cfg(test)]
mod grammar_tests;
#[cfg(test)]
mod meta_tests;
#[cfg(test)]
pub mod test_utils;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use error::{CompileError, Location};
pub use grammar::{Grammar, Namespace};
pub use meta::{GrammarToken, MetaKind, Origin};
pub use symbol::{Alternative, Quantifier, Recognizer, Symbol};

/// Result type for compiling one grammar line.
pub type Result<T> = std::result::Result<T, CompileError>;
