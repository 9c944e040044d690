//! Resolve the inverse marker predicate by swapping its two arguments

use crate::rules::connectives::NECK;
use crate::rules::error::RuleError;

/// Rewrite every marker occurrence in the clause body.
///
/// The body is split on the marker. Text before the first marker passes
/// through untouched; each following chunk starts with the marker's argument
/// list, which is re-emitted with the two arguments swapped. The marker
/// itself is dropped.
pub fn resolve_inverse(clause: &str, marker: &str) -> Result<String, RuleError> {
    let (head, body) = clause
        .split_once(NECK)
        .ok_or(RuleError::MissingImplication)?;

    let mut chunks = body.split(marker);
    let mut resolved = chunks.next().unwrap_or_default().to_string();

    for chunk in chunks {
        resolved.push_str(&swap_arguments(chunk, marker)?);
    }

    Ok(format!("{} {} {}", head.trim_end(), NECK, resolved.trim_start()))
}

/// Swap the two arguments of the first parenthesized group in `chunk`
fn swap_arguments(chunk: &str, marker: &str) -> Result<String, RuleError> {
    let missing = || RuleError::MissingArguments {
        marker: marker.to_string(),
        chunk: chunk.to_string(),
    };

    let (Some(args_start), Some(args_end)) = (chunk.find('('), chunk.find(')')) else {
        return Err(missing());
    };
    if args_end < args_start {
        return Err(missing());
    }

    let args = &chunk[args_start + 1..args_end];
    let parts: Vec<&str> = args.split(',').collect();
    let [first, second] = parts.as_slice() else {
        return Err(RuleError::InverseArity {
            marker: marker.to_string(),
            found: parts.len(),
            args: args.to_string(),
        });
    };

    Ok(format!(
        "{}({},{}){}",
        &chunk[..args_start],
        second.trim(),
        first.trim(),
        &chunk[args_end + 1..]
    ))
}
