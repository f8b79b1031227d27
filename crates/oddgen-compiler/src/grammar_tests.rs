use indoc::indoc;

use crate::diagnostics::DiagnosticKind;
use crate::grammar::{Grammar, Namespace};
use crate::meta::Origin;
use crate::test_utils::grammar;

#[test]
fn namespaces_are_independent() {
    let grammar = grammar(indoc! {r#"
        ignore x = "i";
        define x = "d";
        rule x = "r";
    "#});

    insta::assert_snapshot!(grammar, @r#"
    ignore x = "i";
    define x = "d";
    rule x = "r";
    "#);
    for namespace in Namespace::ALL {
        assert!(grammar.lookup(namespace, "x").is_some());
    }
}

#[test]
fn lookup_miss() {
    let grammar = grammar(r#"rule a = "x";"#);
    assert!(grammar.lookup(Namespace::Rules, "b").is_none());
    assert!(grammar.lookup(Namespace::Definitions, "a").is_none());
}

#[test]
fn redefinition_overwrites_in_place() {
    let grammar = grammar(indoc! {r#"
        rule a = "1";
        rule b = "2";
        rule a = "3";
    "#});

    insta::assert_snapshot!(grammar, @r#"
    rule a = "3";
    rule b = "2";
    "#);
    let names: Vec<_> = grammar.rules().map(|r| r.name()).collect();
    assert_eq!(names, ["a", "b"]);
    let reversed: Vec<_> = grammar.rules().rev().map(|r| r.name()).collect();
    assert_eq!(reversed, ["b", "a"]);
}

#[test]
fn forward_references_compile() {
    let grammar = grammar(r#"rule a = @later "x";"#);
    assert!(grammar.lookup(Namespace::Rules, "later").is_none());
    assert!(grammar.lookup(Namespace::Rules, "a").is_some());
}

#[test]
fn convenience_entry_points() {
    let mut grammar = Grammar::new();
    assert!(grammar.is_empty());

    assert_eq!(grammar.ignore(r#"ws = .space;"#).unwrap().name(), "ws");
    assert_eq!(grammar.define_definition(r#"digit = .number;"#).unwrap().name(), "digit");
    assert_eq!(grammar.rule(r#"sum = #digit "+" #digit;"#).unwrap().name(), "sum");

    assert_eq!(grammar.namespace(Namespace::Ignorations).len(), 1);
    assert_eq!(grammar.namespace(Namespace::Definitions).len(), 1);
    assert_eq!(grammar.namespace(Namespace::Rules).len(), 1);
}

#[test]
fn failed_definition_stores_nothing() {
    let mut grammar = Grammar::new();
    grammar.rule(r#"a = "ok";"#).unwrap();

    assert!(grammar.rule(r#"a = @a "x";"#).is_err());
    insta::assert_snapshot!(grammar, @r#"rule a = "ok";"#);
}

#[test]
fn failed_definition_keeps_no_warnings() {
    let mut grammar = Grammar::new();
    assert!(grammar.rule(r#"a = () | ("x";"#).is_err());
    assert!(grammar.diagnostics().is_empty());
}

#[test]
fn warnings_accumulate() {
    let mut grammar = Grammar::new();
    grammar.rule(r#"a = () "x";"#).unwrap();
    grammar.rule(r#"b = @a+;"#).unwrap();

    let kinds: Vec<_> = grammar.diagnostics().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, [DiagnosticKind::EmptyGroup, DiagnosticKind::StraySymbol]);
}

#[test]
fn origin_positions_errors_in_enclosing_text() {
    let mut grammar = Grammar::new();
    let err = grammar
        .define_at(Namespace::Rules, r#"a = @a;"#, Origin::new(20, 4, 6))
        .unwrap_err();
    assert_eq!(err.location().span, 24..26);
    assert_eq!((err.location().line, err.location().column), (4, 10));
}

#[test]
fn namespace_keywords() {
    assert_eq!(Namespace::from_keyword("ignore"), Some(Namespace::Ignorations));
    assert_eq!(Namespace::from_keyword("define"), Some(Namespace::Definitions));
    assert_eq!(Namespace::from_keyword("rule"), Some(Namespace::Rules));
    assert_eq!(Namespace::from_keyword("token"), None);
}

#[test]
fn grammar_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Grammar>();
}
