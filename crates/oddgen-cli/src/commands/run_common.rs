//! Shared logic for the tokens, parse and trace commands.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use oddgen_core::{LexError, Token};
use oddgen_vm::RuntimeError;

use super::grammar_loader::GrammarFile;

/// Where the program comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgramInput {
    /// Program text file (`-` for stdin).
    Path(PathBuf),
    /// Inline program text.
    Text(String),
    /// JSON token array produced by another tokenizer.
    Tokens(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("grammar and program cannot both be read from stdin")]
    StdinTwice,

    #[error("program is required: use positional argument, -s/--source, or --tokens")]
    MissingProgram,

    #[error("grammar declares no `token` rules: add them or pass --tokens")]
    NoLexer,

    #[error("invalid token file '{path}': {source}")]
    TokenFile {
        path: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Lex(#[from] LexError),
}

/// Read a file, or stdin for `-`.
pub fn load_text(path: &Path) -> Result<String, InputError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(InputError::Stdin)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Load and compile a grammar file, printing its diagnostics.
///
/// Exits with status 1 when the grammar has errors (or warnings, if `strict`).
pub fn load_grammar(path: &Path, strict: bool, color: bool) -> GrammarFile {
    let source = load_text(path).unwrap_or_else(|e| exit_with(&e));
    let file = GrammarFile::parse(&source);

    if !file.diagnostics.is_empty() {
        let name = path.to_string_lossy();
        let rendered = file
            .diagnostics
            .printer(&source)
            .path(&name)
            .colored(color)
            .render();
        eprintln!("{rendered}");
    }

    if !file.is_valid(strict) {
        std::process::exit(1);
    }
    file
}

/// Produce the program tokens from text (lexed with the grammar's lexer) or a token file.
pub fn load_tokens(
    file: &GrammarFile,
    input: Option<&ProgramInput>,
    grammar_path: &Path,
) -> Result<Vec<Token>, InputError> {
    let from_stdin = |p: &Path| p.as_os_str() == "-";

    match input {
        None => Err(InputError::MissingProgram),
        Some(ProgramInput::Tokens(path)) => {
            if from_stdin(path) && from_stdin(grammar_path) {
                return Err(InputError::StdinTwice);
            }
            let json = load_text(path)?;
            oddgen_core::parse_tokens(&json).map_err(|source| InputError::TokenFile {
                path: path.display().to_string(),
                source,
            })
        }
        Some(ProgramInput::Text(text)) => lex(file, text),
        Some(ProgramInput::Path(path)) => {
            if from_stdin(path) && from_stdin(grammar_path) {
                return Err(InputError::StdinTwice);
            }
            lex(file, &load_text(path)?)
        }
    }
}

fn lex(file: &GrammarFile, text: &str) -> Result<Vec<Token>, InputError> {
    let lexer = file.lexer.as_ref().ok_or(InputError::NoLexer)?;
    Ok(lexer.lex(text)?)
}

/// Print a runtime error and exit: status 2 for resource limits, 1 otherwise.
pub fn exit_runtime_error(err: &RuntimeError) -> ! {
    eprintln!("error: {err}");
    if let Some(furthest) = err.furthest() {
        eprintln!("  note: {furthest}");
    }
    std::process::exit(if err.is_limit() { 2 } else { 1 })
}

pub fn exit_with(err: &InputError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1)
}
