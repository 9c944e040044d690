//! Ground Prolog facts → integer-indexed triples for relational learning

pub mod facts;
pub mod dictionary;

pub use facts::*;
pub use dictionary::*;
