//! Email address check
//!
//! Accepts exactly one RFC 5322 mailbox, either a bare `local@domain` or a
//! `Display Name <local@domain>` form, optionally followed by one
//! parenthesized comment. Only spaces and tabs may surround the address;
//! folded headers and comments elsewhere in the address are not accepted.
//! On top of the grammar the domain must contain a dot, which rejects
//! intranet hosts like `root@localhost`.

use std::sync::LazyLock;

use crate::core::{ErrorKind, RuleResult, Value};

// Printable characters other than specials. Non-ASCII is allowed.
const ATOM: &str = r#"[^\s\x00-\x1F\x7F()<>\[\]:;@\\,."]+"#;
const QUOTED: &str = r#""(?:[^"\\\r\n]|\\.)*""#;
const LITERAL: &str = r"\[[^\[\]\\\s]*\]";
// Display name words may contain dots.
const WORD: &str = r#"[^\s\x00-\x1F\x7F()<>\[\]:;@\\,"]+"#;
const COMMENT: &str = r"(?:[ \t]*\([^()\\\r\n]*\))?";

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    let dot_atom = format!(r"{ATOM}(?:\.{ATOM})*");
    let local = format!("(?:{dot_atom}|{QUOTED})");
    let domain = format!("(?:{dot_atom}|{LITERAL})");
    let phrase = format!(r"(?:{WORD}|{QUOTED})(?:[ \t]+(?:{WORD}|{QUOTED}))*");

    regex::Regex::new(&format!(
        r"^[ \t]*(?:{local}@(?P<domain>{domain})|(?:{phrase}[ \t]*)?<{local}@(?P<angle_domain>{domain})>){COMMENT}[ \t]*$"
    ))
    .expect("email pattern is valid")
});

/// Fails with [`ErrorKind::Invalid`] unless the text is a single email
/// address whose domain contains a dot and which does not end in a dot.
///
/// Non-text values are [`ErrorKind::Unsupported`]; vacuous values pass.
pub fn email(value: &Value<'_>, _param: &str) -> RuleResult {
    if value.is_vacuous() {
        return Ok(());
    }
    let Value::Text(text) = value else {
        return Err(ErrorKind::Unsupported.into());
    };

    let Some(captures) = EMAIL_REGEX.captures(text) else {
        return Err(ErrorKind::Invalid.into());
    };
    let domain = captures
        .name("domain")
        .or_else(|| captures.name("angle_domain"))
        .map_or("", |m| m.as_str());

    if !domain.contains('.') || text.ends_with('.') {
        return Err(ErrorKind::Invalid.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("foo@bar.org")]
    #[case("first.last@sub.example.co.uk")]
    #[case("user+tag@example.com")]
    #[case("Bob <bob@example.org>")]
    #[case("\"Bob Smith\" <bob@example.org>")]
    #[case("<bob@example.org>")]
    #[case("\"john doe\"@example.org")]
    #[case("jörg@müller.de")]
    #[case("admin@[192.168.0.1]")]
    #[case(" foo@bar.org\t")]
    #[case("foo@bar.org (work)")]
    #[case("Bob <bob@example.org> (home)")]
    fn accepts(#[case] input: &str) {
        assert_eq!(email(&Value::Text(input), ""), Ok(()), "{input}");
    }

    #[rstest]
    #[case("foo")]
    #[case("foo@")]
    #[case("@bar.org")]
    #[case("foo@bar")]
    #[case("foo@bar.")]
    #[case("foo.bar@baz")]
    #[case("foo..bar@baz.org")]
    #[case(".foo@bar.org")]
    #[case("foo bar@baz.org")]
    #[case("a@b.org, c@d.org")]
    #[case("Bob <bob@example.org")]
    #[case("foo@bar@baz.org")]
    #[case("foo@bar.org\n")]
    #[case("foo@bar.org\r\n")]
    #[case("\nfoo@bar.org")]
    #[case("foo@bar.org\u{2003}")]
    #[case("foo@bar.org\u{b}")]
    #[case("Bob\n<bob@example.org>")]
    #[case("foo@bar.org (unclosed")]
    #[case("foo@bar.org (a\nb)")]
    #[case("foo@bar (comment)")]
    fn rejects(#[case] input: &str) {
        assert_eq!(
            email(&Value::Text(input), ""),
            Err(ErrorKind::Invalid.into()),
            "{input}"
        );
    }

    #[test]
    fn non_text_is_unsupported() {
        assert_eq!(email(&Value::Int(2), ""), Err(ErrorKind::Unsupported.into()));
    }

    #[test]
    fn vacuous_values_pass() {
        assert!(email(&Value::Null, "").is_ok());
        assert!(email(&Value::Text(""), "").is_ok());
        assert!(email(&Value::Int(0), "").is_ok());
    }
}
