//! Mark parenthesized arguments as logic variables by uppercasing them
//!
//! Prolog treats identifiers that start with an uppercase letter as
//! variables. Everything between a matched `(` and `)` is uppercased, while
//! bare predicate names outside any parentheses keep their case.

use crate::rules::error::RuleError;

/// Match every `(` with its `)`.
///
/// Pairs are returned in closing order, so an inner span always precedes the
/// span enclosing it.
pub fn match_parens(text: &str) -> Result<Vec<(usize, usize)>, RuleError> {
    let mut open = Vec::new();
    let mut pairs = Vec::new();

    for (i, byte) in text.bytes().enumerate() {
        match byte {
            b'(' => open.push(i),
            b')' => {
                let start = open
                    .pop()
                    .ok_or(RuleError::UnmatchedClose { position: i })?;
                pairs.push((start, i));
            }
            _ => {}
        }
    }

    if let Some(&position) = open.first() {
        return Err(RuleError::UnclosedOpen { position });
    }

    Ok(pairs)
}

/// Uppercase every parenthesized span, nested spans included.
///
/// The output has exactly the length of the input.
pub fn mark_variables(text: &str) -> Result<String, RuleError> {
    let pairs = match_parens(text)?;
    let mut marked = text.to_string();

    for (start, end) in pairs {
        let upper = uppercase_same_width(&marked[start..=end]);
        marked.replace_range(start..=end, &upper);
    }

    Ok(marked)
}

/// Chars whose uppercase form is a different width (`ß` → `SS`) keep their case
fn uppercase_same_width(span: &str) -> String {
    span.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) if u.len_utf8() == c.len_utf8() => u,
                _ => c,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_arguments_only() {
        let marked = mark_variables("p(X) :- q(x) , INV(y,z).").unwrap();
        assert_eq!(marked, "p(X) :- q(X) , INV(Y,Z).");
    }

    #[test]
    fn test_nested_spans_all_uppercase() {
        let marked = mark_variables("a(b(c),d).").unwrap();
        assert_eq!(marked, "a(B(C),D).");
    }

    #[test]
    fn test_type_annotation_uppercased() {
        let marked = mark_variables("head(x) :- aux((int,y)), body(y).").unwrap();
        assert_eq!(marked, "head(X) :- aux((INT,Y)), body(Y).");
    }

    #[test]
    fn test_pairs_in_closing_order() {
        let pairs = match_parens("a(b(c),d)").unwrap();
        assert_eq!(pairs, vec![(3, 5), (1, 8)]);
    }

    #[test]
    fn test_length_preserved() {
        let inputs = [
            "",
            "no parens here",
            "p(x) :- q(x,y), r(y).",
            "straße(x) :- weiß(ß,y).",
            "a(b(c(d(e))),f(g)) ; h(i).",
        ];
        for input in inputs {
            let marked = mark_variables(input).unwrap();
            assert_eq!(marked.len(), input.len(), "input: {}", input);
            assert_eq!(marked.chars().count(), input.chars().count());
        }
    }

    #[test]
    fn test_non_ascii_uppercased_when_width_allows() {
        let marked = mark_variables("p(é,ß,x) :- q(ñandú).").unwrap();
        assert_eq!(marked, "p(É,ß,X) :- q(ÑANDÚ).");
    }

    #[test]
    fn test_unbalanced_parens() {
        assert_eq!(
            mark_variables("p(x))."),
            Err(RuleError::UnmatchedClose { position: 4 })
        );
        assert_eq!(
            mark_variables("p((x)."),
            Err(RuleError::UnclosedOpen { position: 1 })
        );
    }
}
