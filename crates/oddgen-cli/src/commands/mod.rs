pub mod check;
pub mod grammar_loader;
pub mod parse;
pub mod run_common;
pub mod tokens;
pub mod trace;

#[cfg(test)]
mod run_common_tests;
