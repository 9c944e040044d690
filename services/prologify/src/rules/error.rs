//! Malformed-input errors raised by the rule transformation stages

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("unmatched ')' at byte {position}")]
    UnmatchedClose { position: usize },

    #[error("unclosed '(' at byte {position}")]
    UnclosedOpen { position: usize },

    #[error("clause has no ':-' separating head and body")]
    MissingImplication,

    #[error("marker `{marker}` is not followed by an argument list in `{chunk}`")]
    MissingArguments { marker: String, chunk: String },

    #[error("marker `{marker}` expects exactly two arguments, found {found} in `({args})`")]
    InverseArity {
        marker: String,
        found: usize,
        args: String,
    },

    #[error("type annotation opened at byte {start} has no closing '))' after it")]
    MalformedAnnotation { start: usize },
}
