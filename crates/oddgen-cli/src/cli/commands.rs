//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Every command accepts every runtime flag; the ones it ignores are hidden
//! from `--help`.

use clap::Command;

use super::args::*;

/// Add hidden program input args (for commands that don't read a program).
fn with_hidden_source_args(cmd: Command) -> Command {
    cmd.arg(source_path_arg().hide(true))
        .arg(source_text_arg().hide(true))
        .arg(tokens_file_arg().hide(true))
}

/// Add hidden VM args (for commands that don't run the grammar).
fn with_hidden_vm_args(cmd: Command) -> Command {
    cmd.arg(fuel_arg().hide(true))
        .arg(recursion_limit_arg().hide(true))
        .arg(furthest_arg().hide(true))
}

/// Add hidden output args (for commands that don't print JSON or traces).
fn with_hidden_output_args(cmd: Command) -> Command {
    cmd.arg(compact_arg().hide(true))
        .arg(json_arg().hide(true))
        .arg(verbose_arg().hide(true))
        .arg(no_result_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("oddgen")
        .about("Grammar-driven recognizers for token streams")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(tokens_command())
        .subcommand(parse_command())
        .subcommand(trace_command())
}

/// Compile a grammar file and report its diagnostics.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Compile a grammar file and report diagnostics")
        .override_usage(
            "\
  oddgen check <GRAMMAR>
  oddgen check <GRAMMAR> --strict",
        )
        .after_help(
            r#"EXAMPLES:
  oddgen check calc.odg             # errors fail, warnings are printed
  oddgen check calc.odg --strict    # warnings fail too"#,
        )
        .arg(grammar_path_arg())
        .arg(strict_arg())
        .arg(color_arg());

    with_hidden_output_args(with_hidden_vm_args(with_hidden_source_args(cmd)))
}

/// Tokenize a program with the grammar's `token`/`skip` rules.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Tokenize a program with the grammar's token rules")
        .override_usage(
            "\
  oddgen tokens <GRAMMAR> <SOURCE>
  oddgen tokens <GRAMMAR> -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  oddgen tokens calc.odg prog.txt           # one token per line
  oddgen tokens calc.odg -s '1 + 2'         # inline program
  oddgen tokens calc.odg prog.txt --json    # JSON array, for --tokens"#,
        )
        .arg(grammar_path_arg())
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(json_arg())
        .arg(compact_arg())
        .arg(color_arg());

    with_hidden_vm_args(
        cmd.arg(tokens_file_arg().hide(true))
            .arg(strict_arg().hide(true))
            .arg(verbose_arg().hide(true))
            .arg(no_result_arg().hide(true)),
    )
}

/// Parse a program into a tree of top-level expressions, as JSON.
pub fn parse_command() -> Command {
    let cmd = Command::new("parse")
        .about("Parse a program and output the program tree as JSON")
        .override_usage(
            "\
  oddgen parse <GRAMMAR> <SOURCE>
  oddgen parse <GRAMMAR> -s <TEXT>
  oddgen parse <GRAMMAR> --tokens <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  oddgen parse calc.odg prog.txt              # program file
  oddgen parse calc.odg -s '1 + 2'            # inline program
  oddgen parse calc.odg --tokens toks.json    # externally tokenized
  oddgen parse calc.odg prog.txt --furthest   # explain parse errors"#,
        )
        .arg(grammar_path_arg())
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(tokens_file_arg())
        .arg(compact_arg())
        .arg(fuel_arg())
        .arg(recursion_limit_arg())
        .arg(furthest_arg())
        .arg(strict_arg())
        .arg(color_arg());

    cmd.arg(json_arg().hide(true))
        .arg(verbose_arg().hide(true))
        .arg(no_result_arg().hide(true))
}

/// Trace grammar execution for debugging.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace grammar execution for debugging")
        .override_usage(
            "\
  oddgen trace <GRAMMAR> <SOURCE>
  oddgen trace <GRAMMAR> -s <TEXT> [-v|-vv]",
        )
        .after_help(
            r#"EXAMPLES:
  oddgen trace calc.odg prog.txt          # rule entries and exits
  oddgen trace calc.odg -s '1 + 2' -v     # also alternatives and backtracking
  oddgen trace calc.odg -s '1 + 2' -vv    # also every literal and class"#,
        )
        .arg(grammar_path_arg())
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(tokens_file_arg())
        .arg(verbose_arg())
        .arg(no_result_arg())
        .arg(fuel_arg())
        .arg(recursion_limit_arg())
        .arg(furthest_arg())
        .arg(color_arg());

    cmd.arg(compact_arg().hide(true))
        .arg(json_arg().hide(true))
        .arg(strict_arg().hide(true))
}
