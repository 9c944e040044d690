//! Strip inline type annotations from auxiliary terms
//!
//! Auxiliary terms produced during mining carry their type wrapped in doubled
//! parentheses, e.g. `aux((INT,Y))`. Stripping removes everything from the
//! first `((` through the last `))`.

use crate::rules::error::RuleError;

pub fn strip_types(clause: &str) -> Result<String, RuleError> {
    let Some(start) = clause.find("((") else {
        return Ok(clause.to_string());
    };

    let end = clause
        .rfind("))")
        .filter(|&end| end > start)
        .ok_or(RuleError::MalformedAnnotation { start })?;

    Ok(format!("{}{}", &clause[..start], &clause[end + 2..]))
}

/// Normalize the clause ending so it carries exactly one terminating `.`
pub fn terminate_clause(text: &str) -> String {
    let mut clause = text
        .trim()
        .trim_matches('.')
        .trim()
        .trim_matches(',')
        .trim()
        .to_string();
    clause.push('.');
    clause
}
