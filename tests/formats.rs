//! Output formats rendered from real analyzer output.

use grammar_outline::outline::ast::{OutlineSnapshot, RuleDiagnostic};
use grammar_outline::outline::formats::{FormatError, FormatRegistry, TreevizFormatter};
use grammar_outline::outline::lexing::tokenize;
use grammar_outline::outline::parsing::analyze;

fn snapshot_of(source: &str) -> OutlineSnapshot {
    let tokenized = tokenize(source);
    analyze(tokenized.tokens()).snapshot(tokenized.lines())
}

fn render(source: &str, format: &str) -> String {
    FormatRegistry::with_defaults()
        .serialize(&snapshot_of(source), format)
        .expect("format to render")
}

#[test]
fn test_treeviz_outline() {
    let output = render(
        "// $<Expr\nexpr : expr '+' term | term ;\nterm : INT ;\n// $>\n",
        "treeviz",
    );
    insta::assert_snapshot!(output, @r"
⧉ 2 rules, 2 groups
├─ ▼ Expr
├─ ≔ expr
│ ├─ • expr '+' term
│ ├─ • term
│ └─ ↻ (term) ('+' term)*
├─ ≔ term
│ └─ • INT
└─ ▲ end
");
}

#[test]
fn test_treeviz_line_numbers() {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(TreevizFormatter::with_line_numbers());
    let output = registry
        .serialize(&snapshot_of("a : A\n  | B ;\n// $<G\n"), "treeviz")
        .expect("format to render");
    insta::assert_snapshot!(output, @r"
⧉ 1 rules, 1 groups
01 ├─ ≔ a
01 │ ├─ • A
01 │ └─ • B
03 └─ ▼ G
");
}

#[test]
fn test_treeviz_lexer_rules_and_errors() {
    let tokenized = tokenize("ID : [a-z]+ ;\nWS : ' ' -> skip ;\n");
    let mut outline = analyze(tokenized.tokens());
    if let Some(rule) = outline.rule_named_mut("WS") {
        rule.set_errors(vec![RuleDiagnostic::warning("unused rule")]);
    }
    let output = FormatRegistry::with_defaults()
        .serialize(&outline.snapshot(tokenized.lines()), "treeviz")
        .expect("format to render");
    insta::assert_snapshot!(output, @r"
⧉ 2 rules, 0 groups
├─ ℒ ID
│ └─ • [ a - z ] +
└─ ℒ WS
  ├─ • ' ' -> skip
  └─ ⚠ unused rule
");
}

#[test]
fn test_json_outline() {
    insta::assert_snapshot!(render("r : A ;", "json"), @r#"
{
  "line_count": 1,
  "rules": [
    {
      "name": "r",
      "lexer_rule": false,
      "span": {
        "start": 0,
        "end": 7
      },
      "start": {
        "line": 1,
        "column": 1
      },
      "end": {
        "line": 1,
        "column": 8
      },
      "alternatives": [
        "A"
      ],
      "blocks": 0,
      "left_recursive": false,
      "rewrite": null,
      "errors": []
    }
  ],
  "groups": []
}
"#);
}

#[test]
fn test_yaml_outline() {
    insta::assert_snapshot!(render("r : A ;", "yaml"), @r"
line_count: 1
rules:
- name: r
  lexer_rule: false
  span:
    start: 0
    end: 7
  start:
    line: 1
    column: 1
  end:
    line: 1
    column: 8
  alternatives:
  - A
  blocks: 0
  left_recursive: false
  rewrite: null
  errors: []
groups: []
");
}

#[test]
fn test_unknown_format() {
    let result = FormatRegistry::with_defaults().serialize(&snapshot_of("r : A ;"), "xml");
    assert_eq!(result, Err(FormatError::FormatNotFound("xml".to_string())));
}
