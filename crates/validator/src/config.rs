//! Configuration for rule specification syntax.

use serde::{Deserialize, Serialize};

/// Characters that structure a rule specification string.
///
/// The defaults read `"required,min=5"`: rules separated by `,`, a rule name
/// separated from its parameter by `=`, and `\` escaping a rule separator
/// inside a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecSyntax {
    /// Separates rule invocations.
    pub rule_separator: char,
    /// Separates a rule name from its parameter.
    pub param_separator: char,
    /// Escapes a `rule_separator` inside a parameter.
    pub escape: char,
}

impl Default for SpecSyntax {
    fn default() -> Self {
        Self {
            rule_separator: ',',
            param_separator: '=',
            escape: '\\',
        }
    }
}

/// Registry configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Syntax used by `validate_value` and record validation.
    pub syntax: SpecSyntax,
}

impl ValidatorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule specification syntax.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_syntax(mut self, syntax: SpecSyntax) -> Self {
        self.syntax = syntax;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_documents_fall_back_to_defaults() {
        let config: ValidatorConfig =
            serde_json::from_value(serde_json::json!({"syntax": {"rule_separator": ";"}})).unwrap();

        assert_eq!(config.syntax.rule_separator, ';');
        assert_eq!(config.syntax.param_separator, '=');
        assert_eq!(config.syntax.escape, '\\');
    }

    #[test]
    fn empty_document_is_default() {
        let config: ValidatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }
}
