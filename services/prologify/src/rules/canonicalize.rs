//! Turn one mined rule into a Prolog clause

use crate::config::{Config, ConnectivesConfig};
use crate::rules::connectives::{is_fact, rewrite_connectives};
use crate::rules::error::RuleError;
use crate::rules::inverse::resolve_inverse;
use crate::rules::types::{strip_types, terminate_clause};
use crate::rules::variables::mark_variables;

/// Stateless per-rule transformation pipeline
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    connectives: ConnectivesConfig,
    marker: String,
    strip_types: bool,
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Canonicalizer {
    pub fn new(connectives: ConnectivesConfig, marker: &str, strip_types: bool) -> Self {
        Self {
            connectives,
            marker: marker.to_string(),
            strip_types,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.connectives.clone(),
            &config.inverse.marker,
            config.output.strip_types,
        )
    }

    pub fn with_strip_types(mut self, strip_types: bool) -> Self {
        self.strip_types = strip_types;
        self
    }

    pub fn strips_types(&self) -> bool {
        self.strip_types
    }

    /// Canonicalize a single rule.
    ///
    /// Returns `Ok(None)` for rules with an empty body; those never reach the
    /// rule set.
    pub fn canonicalize(&self, rule: &str) -> Result<Option<String>, RuleError> {
        let clause = rewrite_connectives(rule, &self.connectives);
        let clause = mark_variables(&clause)?;

        if is_fact(&clause) {
            return Ok(None);
        }

        let mut clause = resolve_inverse(&clause, &self.marker)?;
        if self.strip_types {
            clause = terminate_clause(&strip_types(&clause)?);
        }

        tracing::debug!("{} => {}", rule, clause);
        Ok(Some(clause))
    }
}
