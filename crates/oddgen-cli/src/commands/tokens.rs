//! Show the tokens the grammar's lexer produces for a program.

use std::path::PathBuf;

use oddgen_core::{Colors, Token};

use super::run_common::{self, ProgramInput};

pub struct TokensArgs {
    pub grammar_path: PathBuf,
    pub source: Option<ProgramInput>,
    pub json: bool,
    pub pretty: bool,
    pub color: bool,
}

pub fn run(args: TokensArgs) {
    let file = run_common::load_grammar(&args.grammar_path, false, args.color);
    let tokens = run_common::load_tokens(&file, args.source.as_ref(), &args.grammar_path)
        .unwrap_or_else(|e| run_common::exit_with(&e));

    if args.json {
        let output = if args.pretty {
            serde_json::to_string_pretty(&tokens)
        } else {
            serde_json::to_string(&tokens)
        };
        match output {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: JSON serialization failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", format_tokens(&tokens, Colors::new(args.color)));
}

/// One token per line: `line:column kind "lexeme"`.
pub fn format_tokens(tokens: &[Token], colors: Colors) -> String {
    let c = colors;
    let mut out = String::new();
    for token in tokens {
        let position = format!("{}:{}", token.line, token.column);
        out.push_str(&format!(
            "{}{position:<8}{} {}{}{} {}{:?}{}\n",
            c.dim, c.reset, c.blue, token.kind, c.reset, c.green, token.lexeme, c.reset
        ));
    }
    out
}
