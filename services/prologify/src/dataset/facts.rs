//! Parse ground 2-ary Prolog facts

use regex::Regex;
use std::sync::OnceLock;

/// A ground fact `relation(head, tail).`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub relation: String,
    pub head: String,
    pub tail: String,
}

/// A non-comment line that did not match the fact pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_num: usize,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct ParsedFacts {
    pub facts: Vec<Fact>,
    pub skipped: Vec<SkippedLine>,
}

fn fact_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\w+)\s*\(\s*(\w+)\s*,\s*(\w+)\s*\)\s*\.").expect("fact pattern is valid")
    })
}

/// Parse a single trimmed line
pub fn parse_fact_line(line: &str) -> Option<Fact> {
    let caps = fact_pattern().captures(line)?;
    Some(Fact {
        relation: caps.get(1)?.as_str().to_string(),
        head: caps.get(2)?.as_str().to_string(),
        tail: caps.get(3)?.as_str().to_string(),
    })
}

/// Parse every fact in `text`.
///
/// Blank lines and lines starting with `%` or `#` are ignored; anything else
/// that does not parse is logged and skipped.
pub fn parse_facts(text: &str) -> ParsedFacts {
    let mut parsed = ParsedFacts::default();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('%') || line.starts_with('#') {
            continue;
        }

        match parse_fact_line(line) {
            Some(fact) => parsed.facts.push(fact),
            None => {
                tracing::warn!("Could not parse line {}: {}", idx + 1, line);
                parsed.skipped.push(SkippedLine {
                    line_num: idx + 1,
                    text: line.to_string(),
                });
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fact_line() {
        let fact = parse_fact_line("knows(alice, bob).").unwrap();
        assert_eq!(fact.relation, "knows");
        assert_eq!(fact.head, "alice");
        assert_eq!(fact.tail, "bob");

        let fact = parse_fact_line("likes ( a1 ,b_2 ) .").unwrap();
        assert_eq!((fact.head.as_str(), fact.tail.as_str()), ("a1", "b_2"));
    }

    #[test]
    fn test_rejects_non_binary() {
        assert!(parse_fact_line("knows(alice).").is_none());
        assert!(parse_fact_line("knows(alice, bob, carol).").is_none());
        assert!(parse_fact_line("knows(alice, bob)").is_none());
        assert!(parse_fact_line("p(X) :- q(X).").is_none());
        assert!(parse_fact_line("knows('alice smith', bob).").is_none());
    }

    #[test]
    fn test_parse_facts_skips_comments() {
        let text = "% header\n\n# note\nknows(alice,bob).\nbroken line\n  parent(bob, carol).  \n";
        let parsed = parse_facts(text);

        assert_eq!(parsed.facts.len(), 2);
        assert_eq!(parsed.facts[1].relation, "parent");
        assert_eq!(
            parsed.skipped,
            vec![SkippedLine {
                line_num: 5,
                text: "broken line".to_string(),
            }]
        );
    }
}
