//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Unified flags: every command accepts every runtime flag without error
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Program input: positional file, -s text and --tokens file
//! 4. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use oddgen_vm::{FuelLimits, Verbosity};

use super::*;
use crate::cli::commands::{check_command, parse_command, tokens_command, trace_command};
use crate::commands::parse::ParseArgs;
use crate::commands::run_common::ProgramInput;
use crate::commands::trace::TraceArgs;

#[test]
fn check_extracts_grammar_and_strict() {
    let m = check_command()
        .try_get_matches_from(["check", "calc.odg", "--strict"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.grammar_path, PathBuf::from("calc.odg"));
    assert!(params.strict);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_requires_grammar() {
    let result = check_command().try_get_matches_from(["check"]);
    assert!(result.is_err());
}

#[test]
fn check_accepts_runtime_flags() {
    let result = check_command().try_get_matches_from([
        "check",
        "calc.odg",
        "prog.txt",
        "--fuel",
        "500",
        "--recursion-limit",
        "10",
        "--furthest",
        "--compact",
        "--json",
        "-vv",
        "--no-result",
    ]);
    assert!(
        result.is_ok(),
        "check should accept runtime flags: {:?}",
        result.err()
    );

    let params = CheckParams::from_matches(&result.unwrap());
    assert_eq!(params.grammar_path, PathBuf::from("calc.odg"));
}

#[test]
fn check_help_hides_runtime_flags() {
    let help = check_command().render_help().to_string();

    assert!(help.contains("--strict"));
    assert!(help.contains("--color"));
    assert!(!help.contains("--fuel"));
    assert!(!help.contains("--tokens"));
    assert!(!help.contains("--source"));
    assert!(!help.contains("--compact"));
}

#[test]
fn tokens_with_inline_source() {
    let m = tokens_command()
        .try_get_matches_from(["tokens", "calc.odg", "-s", "1 + 2", "--json"])
        .unwrap();
    let params = TokensParams::from_matches(&m);

    assert_eq!(params.source, Some(ProgramInput::Text("1 + 2".into())));
    assert!(params.json);
    assert!(!params.compact);
}

#[test]
fn tokens_help_hides_vm_flags() {
    let help = tokens_command().render_help().to_string();

    assert!(help.contains("--json"));
    assert!(help.contains("--source"));
    assert!(!help.contains("--fuel"));
    assert!(!help.contains("--furthest"));
    assert!(!help.contains("--recursion-limit"));
}

#[test]
fn parse_with_source_file() {
    let m = parse_command()
        .try_get_matches_from(["parse", "calc.odg", "prog.txt"])
        .unwrap();
    let params = ParseParams::from_matches(&m);

    assert_eq!(params.grammar_path, PathBuf::from("calc.odg"));
    assert_eq!(
        params.source,
        Some(ProgramInput::Path(PathBuf::from("prog.txt")))
    );
    assert_eq!(params.fuel, 1_000_000);
    assert_eq!(params.recursion_limit, 1024);
    assert!(!params.furthest);
}

#[test]
fn parse_with_token_file() {
    let m = parse_command()
        .try_get_matches_from(["parse", "calc.odg", "--tokens", "toks.json"])
        .unwrap();
    let params = ParseParams::from_matches(&m);

    assert_eq!(
        params.source,
        Some(ProgramInput::Tokens(PathBuf::from("toks.json")))
    );
}

#[test]
fn parse_without_program_is_accepted_by_clap() {
    let m = parse_command()
        .try_get_matches_from(["parse", "calc.odg"])
        .unwrap();
    assert_eq!(ParseParams::from_matches(&m).source, None);
}

#[test]
fn parse_program_inputs_conflict() {
    let both = parse_command().try_get_matches_from(["parse", "g", "prog.txt", "-s", "1"]);
    assert!(both.is_err());

    let tokens_and_text =
        parse_command().try_get_matches_from(["parse", "g", "--tokens", "t.json", "-s", "1"]);
    assert!(tokens_and_text.is_err());
}

#[test]
fn parse_vm_flags_become_limits() {
    let m = parse_command()
        .try_get_matches_from([
            "parse",
            "calc.odg",
            "-s",
            "1",
            "--fuel",
            "500",
            "--recursion-limit",
            "64",
            "--furthest",
            "--compact",
            "--strict",
            "--color",
            "never",
        ])
        .unwrap();
    let params = ParseParams::from_matches(&m);
    assert_eq!(params.color, ColorChoice::Never);

    let args: ParseArgs = params.into();
    assert_eq!(args.limits, FuelLimits::new().exec_fuel(500).recursion_limit(64));
    assert!(args.furthest);
    assert!(args.strict);
    assert!(!args.pretty);
    assert!(!args.color);
}

#[test]
fn parse_rejects_invalid_fuel() {
    let result = parse_command().try_get_matches_from(["parse", "g", "-s", "1", "--fuel", "lots"]);
    assert!(result.is_err());
}

#[test]
fn trace_verbosity_levels() {
    let cases = [
        (vec!["trace", "g", "-s", "1"], Verbosity::Default),
        (vec!["trace", "g", "-s", "1", "-v"], Verbosity::Verbose),
        (vec!["trace", "g", "-s", "1", "-vv"], Verbosity::VeryVerbose),
        (vec!["trace", "g", "-s", "1", "-vvv"], Verbosity::VeryVerbose),
    ];

    for (argv, expected) in cases {
        let m = trace_command().try_get_matches_from(argv).unwrap();
        let args: TraceArgs = TraceParams::from_matches(&m).into();
        assert_eq!(args.verbosity, expected);
    }
}

#[test]
fn trace_accepts_output_flags() {
    let m = trace_command()
        .try_get_matches_from([
            "trace",
            "g",
            "prog.txt",
            "--no-result",
            "--compact",
            "--strict",
            "--color",
            "always",
        ])
        .unwrap();
    let params = TraceParams::from_matches(&m);

    assert!(params.no_result);
    assert_eq!(params.color, ColorChoice::Always);
    assert_eq!(
        params.source,
        Some(ProgramInput::Path(PathBuf::from("prog.txt")))
    );
}

#[test]
fn cli_lists_all_commands() {
    let cli = build_cli();
    let names: Vec<_> = cli.get_subcommands().map(|c| c.get_name()).collect();
    assert_eq!(names, ["check", "tokens", "parse", "trace"]);
}

#[test]
fn cli_debug_asserts() {
    build_cli().debug_assert();
}
