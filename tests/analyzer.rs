//! Analyzer behavior on realistic grammar text, end to end from source.

use grammar_outline::outline::ast::{GroupKind, RuleDiagnostic};
use grammar_outline::outline::lexing::tokenize;
use grammar_outline::outline::parsing::{analyze, Analyzer, GroupMarkers};
use grammar_outline::outline::testing::{alternative_texts, parse_rules};
use rstest::rstest;

const CALCULATOR: &str = r#"grammar Calculator;

options { language = Java; }

tokens { PLUS; MINUS; }

// $<Parser
prog : stat+ ;

stat : expr NEWLINE          { System.out.println($expr.value); }
     | ID '=' expr NEWLINE   { memory.put($ID.text, $expr.value); }
     | NEWLINE
     ;

expr returns [int value]
     : expr '+' term
     | expr '-' term
     | term
     ;

term : term ('*' | '/') atom
     | atom
     ;

atom : INT | ID | '(' expr ')' ;
// $>

// $<Lexer
ID : ('a'..'z' | 'A'..'Z')+ ;
INT : '0'..'9'+ ;
NEWLINE : '\r'? '\n' ;
WS : (' ' | '\t')+ { skip(); } ;
fragment DIGIT : '0'..'9' ;
// $>
"#;

#[test]
fn test_calculator_rules() {
    assert_eq!(
        parse_rules(CALCULATOR),
        vec!["prog", "stat", "expr", "term", "atom", "ID", "INT", "NEWLINE", "WS", "DIGIT"]
    );
}

#[test]
fn test_calculator_groups() {
    let tokenized = tokenize(CALCULATOR);
    let outline = analyze(tokenized.tokens());
    let groups: Vec<(GroupKind, Option<&str>, Option<usize>)> = outline
        .groups()
        .iter()
        .map(|group| (group.kind(), group.name(), group.anchor()))
        .collect();

    assert_eq!(
        groups,
        vec![
            (GroupKind::Open, Some("Parser"), None),
            (GroupKind::Close, None, Some(4)),
            (GroupKind::Open, Some("Lexer"), Some(4)),
            (GroupKind::Close, None, Some(9)),
        ]
    );
    assert_eq!(
        outline
            .anchor_rule(&outline.groups()[1])
            .map(|rule| rule.name()),
        Some("atom")
    );
}

#[test]
fn test_calculator_alternatives_and_blocks() {
    let tokenized = tokenize(CALCULATOR);
    let outline = analyze(tokenized.tokens());

    let stat = outline.rule_named("stat").expect("stat rule");
    assert_eq!(
        alternative_texts(stat),
        vec![
            vec!["expr", "NEWLINE"],
            vec!["ID", "'='", "expr", "NEWLINE"],
            vec!["NEWLINE"],
        ]
    );
    assert_eq!(stat.blocks().len(), 2);

    let term = outline.rule_named("term").expect("term rule");
    assert_eq!(
        alternative_texts(term),
        vec![vec!["term", "(", "'*'", "|", "'/'", ")", "atom"], vec!["atom"]]
    );

    let ws = outline.rule_named("WS").expect("WS rule");
    assert_eq!(alternative_texts(ws), vec![vec!["(", "' '", "|", "'\\t'", ")", "+"]]);
    assert_eq!(ws.blocks().len(), 1);
}

#[test]
fn test_calculator_left_recursion() {
    let tokenized = tokenize(CALCULATOR);
    let outline = analyze(tokenized.tokens());

    // `expr returns [int value] : expr ...` is recognized through its alternatives
    let rewrites: Vec<(&str, String)> = outline
        .left_recursive_rules()
        .map(|rule| (rule.name(), rule.eliminate_left_recursion()))
        .collect();
    assert_eq!(
        rewrites,
        vec![
            ("expr", "(term) ('+' term | '-' term)*".to_string()),
            ("term", "(atom) (( '*' | '/' ) atom)*".to_string()),
        ]
    );
}

#[test]
fn test_rule_positions() {
    let tokenized = tokenize(CALCULATOR);
    let outline = analyze(tokenized.tokens());

    let prog = outline.rule_named("prog").expect("prog rule");
    assert_eq!(&CALCULATOR[prog.span()], "prog : stat+ ;");
    assert_eq!(prog.start_token().line, 8);
    assert_eq!(tokenized.lines().position(prog.start_offset()).column, 1);

    let digit = outline.rule_named("DIGIT").expect("DIGIT rule");
    assert_eq!(&CALCULATOR[digit.span()], "fragment DIGIT : '0'..'9' ;");
    assert_eq!(
        digit.body_span().map(|span| &CALCULATOR[span]),
        Some("'0'..'9'")
    );
}

#[test]
fn test_single_alternative_rule() {
    let tokenized = tokenize("r : A B ;");
    let outline = analyze(tokenized.tokens());
    assert_eq!(outline.rules().len(), 1);
    assert_eq!(alternative_texts(&outline.rules()[0]), vec![vec!["A", "B"]]);
}

#[rstest]
#[case("r : (A | B) C ;", vec![vec!["(", "A", "|", "B", ")", "C"]])]
#[case("r : A | B C ;", vec![vec!["A"], vec!["B", "C"]])]
#[case("r : A | ;", vec![vec!["A"]])]
#[case("r : | A ;", vec![vec![], vec!["A"]])]
#[case("r : ((A | B) | C) | D ;", vec![vec!["(", "(", "A", "|", "B", ")", "|", "C", ")"], vec!["D"]])]
fn test_alternative_splitting(#[case] source: &str, #[case] expected: Vec<Vec<&str>>) {
    let tokenized = tokenize(source);
    let outline = analyze(tokenized.tokens());
    assert_eq!(alternative_texts(&outline.rules()[0]), expected);
}

#[rstest]
#[case("ID", true)]
#[case("INT_2", true)]
#[case("expr", false)]
#[case("Id", false)]
fn test_lexer_rule_flag(#[case] name: &str, #[case] lexer_rule: bool) {
    let source = format!("{} : 'x' ;", name);
    let tokenized = tokenize(&source);
    let outline = analyze(tokenized.tokens());
    assert_eq!(outline.rules()[0].is_lexer_rule(), lexer_rule);
}

#[test]
fn test_incomplete_rule_appears_once_terminated() {
    let typed = "a : A ;\nb : B C";
    assert_eq!(parse_rules(typed), vec!["a"]);

    let completed = format!("{} ;", typed);
    assert_eq!(parse_rules(&completed), vec!["a", "b"]);
}

#[test]
fn test_group_anchoring_example() {
    let source = "a : A ;\nb : B ;\n// $<loop\n// $>\n";
    let tokenized = tokenize(source);
    let outline = analyze(tokenized.tokens());
    let groups = outline.groups();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name(), Some("loop"));
    assert!(groups[0].is_open());
    assert_eq!(groups[0].anchor(), Some(1));
    assert!(!groups[1].is_open());
    assert_eq!(groups[1].anchor(), Some(1));
    assert_eq!(groups[0].line(), 3);
}

#[test]
fn test_group_name_keeps_inner_spaces() {
    let tokenized = tokenize("// $<Binary operators   \n");
    let outline = analyze(tokenized.tokens());
    assert_eq!(outline.groups()[0].name(), Some("Binary operators"));
}

#[test]
fn test_configured_markers() {
    let analyzer = Analyzer::new(GroupMarkers::new("//<<", "//>>"));
    let tokenized = tokenize("//<<Tokens\nA : 'a' ;\n//>>\n");
    let outline = analyzer.analyze(tokenized.tokens());
    assert_eq!(outline.groups().len(), 2);
    assert_eq!(outline.groups()[0].name(), Some("Tokens"));
}

#[test]
fn test_diagnostics_round_trip_through_outline() {
    let tokenized = tokenize(CALCULATOR);
    let mut outline = analyze(tokenized.tokens());

    for rule in outline.rules_mut() {
        if rule.has_left_recursion() {
            let message = format!("rule {} is left recursive", rule.name());
            rule.set_errors(vec![RuleDiagnostic::warning(message).with_code("LR")]);
        }
    }

    let expr = outline.rule_named("expr").expect("expr rule");
    assert_eq!(expr.error_message(), "rule expr is left recursive");
    assert_eq!(
        expr.error_message_html(),
        "<html>rule expr is left recursive</html>"
    );
    assert_eq!(expr.errors()[0].to_string(), "warning[LR]: rule expr is left recursive");
    assert!(!outline.rule_named("atom").expect("atom rule").has_errors());
}

#[test]
fn test_non_ascii_rule_names() {
    let source = "// $<Règles\nrègle : règle 'x' | A ;\n// $>\n";
    let tokenized = tokenize(source);
    let outline = analyze(tokenized.tokens());

    let rule = outline.rule_named("règle").expect("règle rule");
    assert!(!rule.is_lexer_rule());
    assert_eq!(rule.eliminate_left_recursion(), "(A) ('x')*");
    assert_eq!(
        outline
            .anchor_rule(&outline.groups()[1])
            .map(|rule| rule.name()),
        Some("règle")
    );
}
