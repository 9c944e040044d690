//! Mined rules → Prolog clauses pipeline
//!
//! Each rule passes through these stages:
//! 1. Rewriting connective symbols into Prolog operators
//! 2. Marking parenthesized arguments as variables
//! 3. Resolving the inverse marker predicate
//! 4. Optionally stripping type annotations
//!
//! and the resulting clauses are collected into a sorted, deduplicated rule set.

pub mod error;
pub mod connectives;
pub mod variables;
pub mod inverse;
pub mod types;
pub mod canonicalize;
pub mod ruleset;
pub mod literal;
pub mod ingest;

pub use error::*;
pub use connectives::*;
pub use variables::*;
pub use inverse::*;
pub use types::*;
pub use canonicalize::*;
pub use ruleset::*;
pub use literal::*;
pub use ingest::*;
