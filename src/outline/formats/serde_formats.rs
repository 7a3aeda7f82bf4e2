//! JSON and YAML output: the outline snapshot serialized as is.

use super::registry::{FormatError, Formatter};
use crate::outline::ast::OutlineSnapshot;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, snapshot: &OutlineSnapshot) -> Result<String, FormatError> {
        serde_json::to_string_pretty(snapshot)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Outline snapshot as pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, snapshot: &OutlineSnapshot) -> Result<String, FormatError> {
        serde_yaml::to_string(snapshot).map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Outline snapshot as YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::ast::snapshot_from_outline;
    use crate::outline::lexing::tokenize;
    use crate::outline::parsing::analyze;

    fn snapshot(source: &str) -> OutlineSnapshot {
        let tokenized = tokenize(source);
        let outline = analyze(tokenized.tokens());
        snapshot_from_outline(&outline, tokenized.lines())
    }

    #[test]
    fn test_json_fields() {
        let output = JsonFormatter
            .serialize(&snapshot("expr : expr '+' INT | INT ;"))
            .expect("json");
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");

        assert_eq!(value["line_count"], 1);
        let rule = &value["rules"][0];
        assert_eq!(rule["name"], "expr");
        assert_eq!(rule["lexer_rule"], false);
        assert_eq!(rule["span"]["start"], 0);
        assert_eq!(rule["span"]["end"], 27);
        assert_eq!(rule["start"]["column"], 1);
        assert_eq!(rule["left_recursive"], true);
        assert_eq!(rule["rewrite"], "(INT) ('+' INT)*");
    }

    #[test]
    fn test_yaml_fields() {
        let output = YamlFormatter
            .serialize(&snapshot("// $<Tokens\nINT : [0-9]+ ;\n"))
            .expect("yaml");
        let value: serde_yaml::Value = serde_yaml::from_str(&output).expect("valid yaml");

        assert_eq!(value["rules"][0]["name"].as_str(), Some("INT"));
        assert_eq!(value["rules"][0]["lexer_rule"].as_bool(), Some(true));
        assert!(value["rules"][0]["rewrite"].is_null());
        assert_eq!(value["groups"][0]["kind"].as_str(), Some("open"));
        assert_eq!(value["groups"][0]["name"].as_str(), Some("Tokens"));
        assert!(value["groups"][0]["anchor"].is_null());
    }
}
