use crate::{LexError, Lexer};

fn odd_lexer() -> Lexer {
    Lexer::builder()
        .skip("whitespace", r"\s+")
        .skip("comment", r"//[^\n]*")
        .token("keyword", r"if|else|while")
        .token("operator", r"[+\-*/=<>]")
        .token("interpunction", r"[(){}\[\],;]")
        .token("number", r"[0-9]+")
        .token("identifier", r"[a-zA-Z][a-zA-Z-]*")
        .build()
        .unwrap()
}

fn snapshot(source: &str) -> String {
    let tokens = odd_lexer().lex(source).unwrap();
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!(
            "{} {:?} {}:{}\n",
            token.kind, token.lexeme, token.line, token.column
        ));
    }
    out
}

#[test]
fn simple_sum() {
    insta::assert_snapshot!(snapshot("1 + 2"), @r#"
    number "1" 1:1
    operator "+" 1:3
    number "2" 1:5
    "#);
}

#[test]
fn skips_whitespace_and_comments() {
    let source = indoc::indoc! {"
        // leading comment
        x = [1, 2]
    "};
    insta::assert_snapshot!(snapshot(source), @r#"
    identifier "x" 2:1
    operator "=" 2:3
    interpunction "[" 2:5
    number "1" 2:6
    interpunction "," 2:7
    number "2" 2:9
    interpunction "]" 2:10
    "#);
}

#[test]
fn first_declared_rule_wins() {
    // `keyword` is declared before `identifier`, so `if` is a keyword even
    // though `identifier` matches it too.
    insta::assert_snapshot!(snapshot("if iffy"), @r#"
    keyword "if" 1:1
    keyword "if" 1:4
    identifier "fy" 1:6
    "#);
}

#[test]
fn records_byte_offsets() {
    let tokens = odd_lexer().lex("ab  cd").unwrap();
    assert_eq!(tokens[0].offset, 0);
    assert_eq!(tokens[1].offset, 4);
}

#[test]
fn unexpected_character() {
    let err = odd_lexer().lex("1 +\n  $").unwrap_err();
    assert_eq!(
        err,
        LexError::UnexpectedCharacter {
            found: '$',
            line: 2,
            column: 3,
            offset: 6,
        }
    );
    assert_eq!(
        err.to_string(),
        "unexpected character '$' at line 2, column 3"
    );
}

#[test]
fn empty_source() {
    assert!(odd_lexer().lex("").unwrap().is_empty());
}

#[test]
fn invalid_pattern() {
    let err = Lexer::builder().token("broken", "(").build().unwrap_err();
    assert!(matches!(err, LexError::InvalidPattern { ref name, .. } if name == "broken"));
}

#[test]
fn redeclared_rule_keeps_position() {
    let lexer = Lexer::builder()
        .token("a", "a")
        .token("b", "b")
        .token("a", "aa")
        .build()
        .unwrap();
    let names: Vec<_> = lexer.rule_names().collect();
    assert_eq!(names, ["a", "b"]);
}
