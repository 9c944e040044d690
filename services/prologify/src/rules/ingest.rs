//! Rules ingestion - discovers attempt files and decodes their records

use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::rules::canonicalize::Canonicalizer;
use crate::rules::literal::parse_literal;
use crate::rules::ruleset::RuleSet;

/// One mining attempt; only its rules matter here
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Attempt {
    pub rules: Vec<String>,
}

/// Counts gathered while converting a directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    pub files: usize,
    pub attempts: usize,
    pub rules: usize,
    pub facts_skipped: usize,
    pub clauses: usize,
}

/// Decode one record line.
///
/// JSON is tried first, then the literal record syntax.
pub fn decode_attempt(line: &str) -> Result<Attempt> {
    if let Ok(attempt) = serde_json::from_str::<Attempt>(line) {
        return Ok(attempt);
    }

    let value = parse_literal(line.trim())?;
    let attempt = serde_json::from_value(value).context("Record has no usable 'rules' list")?;
    Ok(attempt)
}

/// Regular files in `dir` (not recursive) whose name ends with `suffix`,
/// sorted by file name
pub fn discover_inputs<P: AsRef<Path>>(dir: P, suffix: &str) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        anyhow::bail!("Target directory not found: {:?}", dir);
    }

    let mut inputs = Vec::new();
    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to list {:?}", dir))?;
        let matches = entry
            .file_name()
            .to_str()
            .map(|name| name.ends_with(suffix))
            .unwrap_or(false);
        if matches && entry.file_type().is_file() {
            inputs.push(entry.into_path());
        }
    }

    Ok(inputs)
}

/// Load every attempt record from a file, one per non-blank line
pub fn load_attempts<P: AsRef<Path>>(path: P) -> Result<Vec<Attempt>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open attempts file: {:?}", path))?;
    let reader = BufReader::new(file);

    let mut attempts = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {:?}", path))?;
        if line.trim().is_empty() {
            continue;
        }
        let attempt = decode_attempt(&line)
            .with_context(|| format!("Failed to decode record at {:?}:{}", path, idx + 1))?;
        attempts.push(attempt);
    }

    Ok(attempts)
}

/// Canonicalize every rule found under `dir` into one rule set.
///
/// All inputs are read before any rule is transformed. The first malformed
/// record or rule aborts the whole conversion.
pub fn convert_directory<P: AsRef<Path>>(
    dir: P,
    suffix: &str,
    canonicalizer: &Canonicalizer,
) -> Result<(RuleSet, ConvertStats)> {
    let inputs = discover_inputs(&dir, suffix)?;
    tracing::info!("Found {} input files ending with {:?}", inputs.len(), suffix);

    let mut targets = Vec::with_capacity(inputs.len());
    for path in &inputs {
        let attempts = load_attempts(path)?;
        tracing::info!("Loaded {} attempts from {:?}", attempts.len(), path);
        targets.push((path, attempts));
    }

    let mut rules = RuleSet::new();
    let mut stats = ConvertStats {
        files: inputs.len(),
        ..ConvertStats::default()
    };

    for (path, attempts) in &targets {
        for attempt in attempts {
            stats.attempts += 1;
            for rule in &attempt.rules {
                stats.rules += 1;
                let clause = canonicalizer.canonicalize(rule).with_context(|| {
                    format!("Failed to canonicalize rule {:?} from {:?}", rule, path)
                })?;
                match clause {
                    Some(clause) => {
                        stats.clauses += 1;
                        rules.insert(clause);
                    }
                    None => stats.facts_skipped += 1,
                }
            }
        }
    }

    tracing::info!(
        "Canonicalized {} rules into {} clauses ({} distinct), skipped {} facts",
        stats.rules,
        stats.clauses,
        rules.len(),
        stats.facts_skipped
    );

    Ok((rules, stats))
}
