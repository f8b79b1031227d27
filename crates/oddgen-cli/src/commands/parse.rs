//! Parse a program and print its tree as JSON.

use std::path::PathBuf;

use oddgen_vm::{FuelLimits, VM};

use super::run_common::{self, ProgramInput};

pub struct ParseArgs {
    pub grammar_path: PathBuf,
    pub source: Option<ProgramInput>,
    pub pretty: bool,
    pub limits: FuelLimits,
    pub furthest: bool,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: ParseArgs) {
    let file = run_common::load_grammar(&args.grammar_path, args.strict, args.color);
    let tokens = run_common::load_tokens(&file, args.source.as_ref(), &args.grammar_path)
        .unwrap_or_else(|e| run_common::exit_with(&e));

    let vm = VM::builder(&file.grammar)
        .limits(args.limits)
        .track_furthest(args.furthest)
        .build();

    let tree = match vm.parse_program(&tokens) {
        Ok(tree) => tree,
        Err(e) => run_common::exit_runtime_error(&e),
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&tree)
    } else {
        serde_json::to_string(&tree)
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: JSON serialization failed: {}", e);
            std::process::exit(1);
        }
    }
}
