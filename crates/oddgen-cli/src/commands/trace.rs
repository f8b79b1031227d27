//! Trace grammar execution for debugging.

use std::path::PathBuf;

use oddgen_core::Colors;
use oddgen_vm::{FuelLimits, PrintTracer, VM, Verbosity};

use super::run_common::{self, ProgramInput};

pub struct TraceArgs {
    pub grammar_path: PathBuf,
    pub source: Option<ProgramInput>,
    pub verbosity: Verbosity,
    pub no_result: bool,
    pub limits: FuelLimits,
    pub furthest: bool,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let file = run_common::load_grammar(&args.grammar_path, false, args.color);
    let tokens = run_common::load_tokens(&file, args.source.as_ref(), &args.grammar_path)
        .unwrap_or_else(|e| run_common::exit_with(&e));

    let vm = VM::builder(&file.grammar)
        .limits(args.limits)
        .track_furthest(args.furthest)
        .build();
    let colors = Colors::new(args.color);
    let mut tracer = PrintTracer::new(args.verbosity, colors);

    let tree = match vm.parse_program_with(&tokens, &mut tracer) {
        Ok(tree) => {
            tracer.print();
            tree
        }
        Err(e) => {
            tracer.print();
            run_common::exit_runtime_error(&e)
        }
    };

    if args.no_result {
        return;
    }

    println!("{}---{}", colors.dim, colors.reset);
    print!("{}", tree);
}
