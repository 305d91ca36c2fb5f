//! Rule specification parsing.
//!
//! A specification such as `"required,email,min=5"` is split into ordered
//! [`RuleCall`]s. Parsing never fails: empty segments are dropped, and a
//! segment with an empty name is kept so the registry can report it as an
//! unknown rule.

use std::fmt;

use crate::config::SpecSyntax;

/// One rule invocation: a name and a possibly empty parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCall {
    /// Registry name of the rule.
    pub name: String,
    /// Parameter passed to the rule, `""` when absent.
    pub param: String,
}

impl RuleCall {
    /// Creates a rule invocation.
    pub fn new(name: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param: param.into(),
        }
    }
}

impl fmt::Display for RuleCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.param.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}={}", self.name, self.param)
        }
    }
}

/// An ordered list of rule invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSpec {
    calls: Vec<RuleCall>,
}

impl RuleSpec {
    /// Parses `spec` with the default syntax.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        Self::parse_with(spec, &SpecSyntax::default())
    }

    /// Parses `spec` with a custom syntax.
    #[must_use]
    pub fn parse_with(spec: &str, syntax: &SpecSyntax) -> Self {
        let calls = split_segments(spec, syntax)
            .into_iter()
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| match segment.split_once(syntax.param_separator) {
                Some((name, param)) => RuleCall::new(name.trim(), param),
                None => RuleCall::new(segment.trim(), ""),
            })
            .collect();
        Self { calls }
    }

    /// Appends an invocation.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: impl Into<String>, param: impl Into<String>) -> Self {
        self.calls.push(RuleCall::new(name, param));
        self
    }

    /// Returns the invocations in order.
    #[must_use]
    pub fn calls(&self) -> &[RuleCall] {
        &self.calls
    }

    /// Iterates over the invocations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, RuleCall> {
        self.calls.iter()
    }

    /// Returns the number of invocations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Returns true if there are no invocations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSpec {
    type Item = &'a RuleCall;
    type IntoIter = std::slice::Iter<'a, RuleCall>;

    fn into_iter(self) -> Self::IntoIter {
        self.calls.iter()
    }
}

impl FromIterator<RuleCall> for RuleSpec {
    fn from_iter<I: IntoIterator<Item = RuleCall>>(iter: I) -> Self {
        Self {
            calls: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, call) in self.calls.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{call}")?;
        }
        Ok(())
    }
}

// Splits on unescaped rule separators. The escape character only has meaning
// directly before a separator; anywhere else it is kept verbatim.
fn split_segments(spec: &str, syntax: &SpecSyntax) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = spec.chars().peekable();

    while let Some(c) = chars.next() {
        if c == syntax.escape && chars.peek() == Some(&syntax.rule_separator) {
            current.push(syntax.rule_separator);
            chars.next();
        } else if c == syntax.rule_separator {
            segments.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    segments.push(current);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(spec: &RuleSpec) -> Vec<(&str, &str)> {
        spec.iter()
            .map(|c| (c.name.as_str(), c.param.as_str()))
            .collect()
    }

    #[test]
    fn bare_and_parameterized_rules() {
        let spec = RuleSpec::parse("required,email,min=5");
        assert_eq!(
            pairs(&spec),
            vec![("required", ""), ("email", ""), ("min", "5")]
        );
    }

    #[test]
    fn whitespace_and_empty_segments() {
        let spec = RuleSpec::parse(" required , ,min=3,");
        assert_eq!(pairs(&spec), vec![("required", ""), ("min", "3")]);
        assert!(RuleSpec::parse("").is_empty());
    }

    #[test]
    fn parameter_keeps_later_separators() {
        let spec = RuleSpec::parse("regexp=a=b");
        assert_eq!(pairs(&spec), vec![("regexp", "a=b")]);
    }

    #[test]
    fn escaped_rule_separator_stays_in_parameter() {
        let spec = RuleSpec::parse(r"regexp=^a\,b$,required");
        assert_eq!(pairs(&spec), vec![("regexp", "^a,b$"), ("required", "")]);
    }

    #[test]
    fn lone_escape_is_literal() {
        let spec = RuleSpec::parse(r"regexp=\d+");
        assert_eq!(pairs(&spec), vec![("regexp", r"\d+")]);
    }

    #[test]
    fn empty_name_is_kept() {
        let spec = RuleSpec::parse("=5");
        assert_eq!(pairs(&spec), vec![("", "5")]);
    }

    #[test]
    fn custom_syntax() {
        let syntax = SpecSyntax {
            rule_separator: ';',
            param_separator: ':',
            escape: '\\',
        };
        let spec = RuleSpec::parse_with("required;min:5", &syntax);
        assert_eq!(pairs(&spec), vec![("required", ""), ("min", "5")]);
    }

    #[test]
    fn display_round_trips_simple_specs() {
        let spec = RuleSpec::default().with("required", "").with("min", "5");
        assert_eq!(spec.to_string(), "required,min=5");
    }
}
