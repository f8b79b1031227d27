use crate::meta::{GrammarToken, MetaKind, Origin, lex, lex_at};

fn dump(tokens: &[GrammarToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!(
            "{:?} {:?} {}:{} {:?}\n",
            token.kind, token.text, token.line, token.column, token.span
        ));
    }
    out
}

#[test]
fn rule_line() {
    insta::assert_snapshot!(dump(&lex(r#"sum = @number "+" @number;"#)), @r#"
    Name "sum" 1:1 0..3
    Assignment "=" 1:5 4..5
    SubruleRef "@number" 1:7 6..13
    Literal "\"+\"" 1:15 14..17
    SubruleRef "@number" 1:19 18..25
    Terminator ";" 1:26 25..26
    "#);
}

#[test]
fn all_sigils_and_quantifiers() {
    insta::assert_snapshot!(dump(&lex("a = .x? #d* ~i+ (b | c) or e")), @r##"
    Name "a" 1:1 0..1
    Assignment "=" 1:3 2..3
    ClassRef ".x" 1:5 4..6
    Optional "?" 1:7 6..7
    DefinitionRef "#d" 1:9 8..10
    ZeroOrMore "*" 1:11 10..11
    IgnorationRef "~i" 1:13 12..14
    OneOrMore "+" 1:15 14..15
    GroupOpen "(" 1:17 16..17
    Name "b" 1:18 17..18
    Alternator "|" 1:20 19..20
    Name "c" 1:22 21..22
    GroupClose ")" 1:23 22..23
    Alternator "or" 1:25 24..26
    Name "e" 1:28 27..28
    "##);
}

#[test]
fn or_prefix_is_a_name() {
    let tokens = lex("order");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, MetaKind::Name);
}

#[test]
fn comments_are_trivia() {
    let tokens = lex("a = \"x\"; // trailing");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            MetaKind::Name,
            MetaKind::Assignment,
            MetaKind::Literal,
            MetaKind::Terminator
        ]
    );
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(dump(&lex("a = $%^ b")), @r#"
    Name "a" 1:1 0..1
    Assignment "=" 1:3 2..3
    UnexpectedFragment "$%^" 1:5 4..7
    Name "b" 1:9 8..9
    "#);
}

#[test]
fn trailing_garbage() {
    let tokens = lex("a = b !!");
    let last = tokens.last().unwrap();
    assert_eq!(last.kind, MetaKind::UnexpectedFragment);
    assert_eq!(last.text, "!!");
}

#[test]
fn literal_escapes() {
    let tokens = lex(r#""a\"b\\c""#);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, MetaKind::Literal);
    assert_eq!(tokens[0].literal_value(), r#"a"b\c"#);
}

#[test]
fn reference_names_drop_sigils() {
    let tokens = lex(".number @expr #def ~ws plain");
    let names: Vec<_> = tokens.iter().map(|t| t.name()).collect();
    assert_eq!(names, ["number", "expr", "def", "ws", "plain"]);
}

#[test]
fn origin_shifts_spans_and_positions() {
    let tokens = lex_at("a = b;", Origin::new(40, 3, 6));
    assert_eq!(tokens[0].span, 40..41);
    assert_eq!((tokens[0].line, tokens[0].column), (3, 6));
    assert_eq!(tokens[2].span, 44..45);
    assert_eq!((tokens[2].line, tokens[2].column), (3, 10));
}

#[test]
fn empty_line() {
    assert!(lex("").is_empty());
    assert!(lex("   // only a comment").is_empty());
}
