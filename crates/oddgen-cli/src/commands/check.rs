use std::path::PathBuf;

use super::run_common::load_grammar;

pub struct CheckArgs {
    pub grammar_path: PathBuf,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    // Diagnostics are printed and invalid grammars exit inside the loader.
    let _ = load_grammar(&args.grammar_path, args.strict, args.color);

    // Silent on success (like cargo check)
}
