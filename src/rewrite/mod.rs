//! The rewriter: a single-threaded, single-PRNG engine that applies a
//! [`crate::rules::RuleTable`] to a token sequence.

pub mod engine;

pub use engine::Rewriter;
