//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use oddgen_vm::{FuelLimits, Verbosity};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::parse::ParseArgs;
use crate::commands::run_common::ProgramInput;
use crate::commands::tokens::TokensArgs;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub grammar_path: PathBuf,
    pub strict: bool,
    pub color: ColorChoice,
    // Note: program input, VM and output flags are parsed but not extracted
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub grammar_path: PathBuf,
    pub source: Option<ProgramInput>,
    pub json: bool,
    pub compact: bool,
    pub color: ColorChoice,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            source: program_input(m),
            json: m.get_flag("json"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            source: p.source,
            json: p.json,
            pretty: !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout()),
            color: p.color.should_colorize(),
        }
    }
}

pub struct ParseParams {
    pub grammar_path: PathBuf,
    pub source: Option<ProgramInput>,
    pub compact: bool,
    pub fuel: u32,
    pub recursion_limit: u32,
    pub furthest: bool,
    pub strict: bool,
    pub color: ColorChoice,
}

impl ParseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            source: program_input(m),

            // Output options
            compact: m.get_flag("compact"),
            strict: m.get_flag("strict"),
            color: parse_color(m),

            // VM options
            fuel: m.get_one::<u32>("fuel").copied().unwrap_or(1_000_000),
            recursion_limit: m
                .get_one::<u32>("recursion_limit")
                .copied()
                .unwrap_or(1024),
            furthest: m.get_flag("furthest"),
        }
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(p: ParseParams) -> Self {
        // Pretty by default when stdout is a TTY, unless --compact is passed
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());

        Self {
            grammar_path: p.grammar_path,
            source: p.source,
            pretty,
            limits: FuelLimits::new()
                .exec_fuel(p.fuel)
                .recursion_limit(p.recursion_limit),
            furthest: p.furthest,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub grammar_path: PathBuf,
    pub source: Option<ProgramInput>,
    pub verbose: u8,
    pub no_result: bool,
    pub fuel: u32,
    pub recursion_limit: u32,
    pub furthest: bool,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            source: program_input(m),

            // Trace options
            verbose: m.get_count("verbose"),
            no_result: m.get_flag("no_result"),
            color: parse_color(m),

            // VM options
            fuel: m.get_one::<u32>("fuel").copied().unwrap_or(1_000_000),
            recursion_limit: m
                .get_one::<u32>("recursion_limit")
                .copied()
                .unwrap_or(1024),
            furthest: m.get_flag("furthest"),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            grammar_path: p.grammar_path,
            source: p.source,
            verbosity,
            no_result: p.no_result,
            limits: FuelLimits::new()
                .exec_fuel(p.fuel)
                .recursion_limit(p.recursion_limit),
            furthest: p.furthest,
            color: p.color.should_colorize(),
        }
    }
}

/// The grammar positional is required, so clap guarantees it is present.
fn grammar_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("grammar_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

/// Program input, by precedence: token file, inline text, program file.
fn program_input(m: &ArgMatches) -> Option<ProgramInput> {
    if let Some(path) = m.get_one::<PathBuf>("tokens_file") {
        return Some(ProgramInput::Tokens(path.clone()));
    }
    if let Some(text) = m.get_one::<String>("source_text") {
        return Some(ProgramInput::Text(text.clone()));
    }
    m.get_one::<PathBuf>("source_path")
        .cloned()
        .map(ProgramInput::Path)
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
