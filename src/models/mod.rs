//! Data models module
//!
//! Defines the biographical Record, the unvalidated Candidate built from
//! command-line input, and the Violations reported by validation.

pub mod record;
pub mod violation;

pub use record::{canonical_name, Candidate, Record};
#[cfg(test)]
pub use record::Sex;
pub use violation::Violation;
