//! Rewrite mined-rule connectives into Prolog operators

use crate::config::ConnectivesConfig;

/// Prolog operator tokens the connectives map onto
pub const NECK: &str = ":-";
pub const AND: &str = ",";
pub const OR: &str = ";";

/// Replace every connective symbol with its Prolog operator.
///
/// The operators themselves are never touched, so running this on its own
/// output is a no-op.
pub fn replace_connectives(rule: &str, symbols: &ConnectivesConfig) -> String {
    rule.replace(&symbols.implication, NECK)
        .replace(&symbols.conjunction, AND)
        .replace(&symbols.disjunction, OR)
}

/// Replace connectives and terminate the rule with a single `.`
pub fn rewrite_connectives(rule: &str, symbols: &ConnectivesConfig) -> String {
    let replaced = replace_connectives(rule, symbols);
    let mut clause = replaced
        .trim()
        .trim_matches(',')
        .trim()
        .to_string();
    clause.push('.');
    clause
}

/// A rule whose body is empty ends in `:-.` once whitespace is dropped
pub fn is_fact(clause: &str) -> bool {
    let compact: String = clause.chars().filter(|c| !c.is_whitespace()).collect();
    compact.ends_with(":-.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols() -> ConnectivesConfig {
        ConnectivesConfig::default()
    }

    #[test]
    fn test_rewrite_rule() {
        let clause = rewrite_connectives("p(X) <- q(x) ∧ INV(y,z)", &symbols());
        assert_eq!(clause, "p(X) :- q(x) , INV(y,z).");
    }

    #[test]
    fn test_rewrite_disjunction() {
        let clause = rewrite_connectives("p(x) <- q(x) ∨ r(x)", &symbols());
        assert_eq!(clause, "p(x) :- q(x) ; r(x).");
    }

    #[test]
    fn test_trailing_comma_and_whitespace_trimmed() {
        let clause = rewrite_connectives("  p(x) <- q(x) ∧  ", &symbols());
        assert_eq!(clause, "p(x) :- q(x).");
    }

    #[test]
    fn test_replace_is_idempotent() {
        let once = replace_connectives("p(x) <- q(x,y) ∧ r(y) ∨ s(y)", &symbols());
        let twice = replace_connectives(&once, &symbols());
        assert_eq!(once, twice);
        assert_eq!(once.matches(NECK).count(), 1);
        assert_eq!(once.matches(OR).count(), 1);
    }

    #[test]
    fn test_fact_detection() {
        let clause = rewrite_connectives("p(x) <- ", &symbols());
        assert_eq!(clause, "p(x) :-.");
        assert!(is_fact(&clause));
        assert!(is_fact("p(x) :- \t."));
        assert!(!is_fact("p(x) :- q(x)."));
    }

    #[test]
    fn test_custom_symbols() {
        let custom = ConnectivesConfig {
            implication: "=>".to_string(),
            conjunction: "&".to_string(),
            disjunction: "|".to_string(),
        };
        let clause = rewrite_connectives("h(x) => a(x) & b(x) | c(x)", &custom);
        assert_eq!(clause, "h(x) :- a(x) , b(x) ; c(x).");
    }
}
