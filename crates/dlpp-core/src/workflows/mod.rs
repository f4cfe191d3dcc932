//! # Workflows Module
//!
//! High-level entry points that tie the log reader, column re-sequencer, and
//! table writer together into complete pipelines.
//!
//! - **Parse Workflow** ([`parse`]) - The full load → headers → records →
//!   re-sequence → write pass used by the `dlpp` binary.

pub mod parse;
