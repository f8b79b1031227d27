use std::path::{Path, PathBuf};

use indoc::indoc;
use oddgen_core::{Colors, LexError};

use super::grammar_loader::GrammarFile;
use super::run_common::{InputError, ProgramInput, load_tokens};
use super::tokens::format_tokens;

fn calc() -> GrammarFile {
    GrammarFile::parse(indoc! {r#"
        skip whitespace /\s+/
        token number /[0-9]+/
        token operator /[+*]/
        rule sum = .number "+" .number;
    "#})
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("oddgen-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn inline_text_is_lexed() {
    let file = calc();
    let input = ProgramInput::Text("1 + 2".into());
    let tokens = load_tokens(&file, Some(&input), Path::new("calc.odg")).unwrap();

    assert_eq!(
        format_tokens(&tokens, Colors::OFF),
        "1:1      number \"1\"\n1:3      operator \"+\"\n1:5      number \"2\"\n"
    );
}

#[test]
fn program_file_is_lexed() {
    let file = calc();
    let path = temp_file("program.txt", "1 +\n2");
    let tokens = load_tokens(&file, Some(&ProgramInput::Path(path.clone())), Path::new("calc.odg"));
    std::fs::remove_file(&path).unwrap();

    let tokens = tokens.unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!((tokens[2].line, tokens[2].column, tokens[2].offset), (2, 1, 4));
}

#[test]
fn token_file_bypasses_the_lexer() {
    let file = GrammarFile::parse("rule sum = .number \"+\" .number;\n");
    let path = temp_file(
        "tokens.json",
        r#"[
            {"kind": "number", "lexeme": "1", "line": 1, "column": 1},
            {"kind": "operator", "lexeme": "+", "line": 1, "column": 3}
        ]"#,
    );
    let tokens = load_tokens(&file, Some(&ProgramInput::Tokens(path.clone())), Path::new("g"));
    std::fs::remove_file(&path).unwrap();

    let tokens = tokens.unwrap();
    assert_eq!(tokens[1].kind, "operator");
    assert_eq!(tokens[1].offset, 0);
}

#[test]
fn malformed_token_file() {
    let file = calc();
    let path = temp_file("bad-tokens.json", r#"[{"kind": "number"}]"#);
    let err = load_tokens(&file, Some(&ProgramInput::Tokens(path.clone())), Path::new("g"));
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(err, Err(InputError::TokenFile { .. })));
}

#[test]
fn missing_program() {
    let err = load_tokens(&calc(), None, Path::new("calc.odg")).unwrap_err();
    insta::assert_snapshot!(
        err,
        @"program is required: use positional argument, -s/--source, or --tokens"
    );
}

#[test]
fn text_needs_token_rules() {
    let file = GrammarFile::parse("rule a = \"x\";\n");
    let err = load_tokens(&file, Some(&ProgramInput::Text("x".into())), Path::new("g")).unwrap_err();
    assert!(matches!(err, InputError::NoLexer));
}

#[test]
fn lex_errors_are_reported() {
    let err = load_tokens(
        &calc(),
        Some(&ProgramInput::Text("1 $".into())),
        Path::new("calc.odg"),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        InputError::Lex(LexError::UnexpectedCharacter { found: '$', line: 1, column: 3, .. })
    ));
    insta::assert_snapshot!(err, @"unexpected character '$' at line 1, column 3");
}

#[test]
fn stdin_cannot_feed_both_inputs() {
    let input = ProgramInput::Path(PathBuf::from("-"));
    let err = load_tokens(&calc(), Some(&input), Path::new("-")).unwrap_err();
    assert!(matches!(err, InputError::StdinTwice));
}

#[test]
fn missing_program_file() {
    let input = ProgramInput::Path(PathBuf::from("/nonexistent/oddgen/program.txt"));
    let err = load_tokens(&calc(), Some(&input), Path::new("calc.odg")).unwrap_err();
    assert!(matches!(err, InputError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read '/nonexistent/oddgen/program.txt'"));
}
