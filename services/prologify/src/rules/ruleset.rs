//! Deduplicated, sorted collection of canonical clauses

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    clauses: BTreeSet<String>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the clause was already present
    pub fn insert(&mut self, clause: String) -> bool {
        self.clauses.insert(clause)
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Clauses in ascending byte order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.clauses.iter().map(String::as_str)
    }

    /// Newline-joined clauses without a trailing newline
    pub fn render(&self) -> String {
        self.iter().collect::<Vec<_>>().join("\n")
    }

    /// Write the rendered rule set to `path`.
    ///
    /// The content goes to a sibling temporary file first and is renamed into
    /// place, so a failed write never leaves a partial output file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let mut tmp_name = path
            .file_name()
            .with_context(|| format!("Output path has no file name: {:?}", path))?
            .to_os_string();
        tmp_name.push(".partial");
        let tmp_path = path.with_file_name(tmp_name);

        let written = std::fs::File::create(&tmp_path)
            .and_then(|mut file| {
                file.write_all(self.render().as_bytes())?;
                file.sync_all()
            })
            .and_then(|_| std::fs::rename(&tmp_path, path));

        if let Err(e) = written {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e).with_context(|| format!("Failed to write rules to {:?}", path));
        }

        tracing::info!("Wrote {} clauses to {:?}", self.len(), path);
        Ok(())
    }
}

impl FromIterator<String> for RuleSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            clauses: iter.into_iter().collect(),
        }
    }
}
