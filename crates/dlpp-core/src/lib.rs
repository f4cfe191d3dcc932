//! # dlpolyparse Core Library
//!
//! A library for recovering the tabulated physical properties from a DL_POLY
//! `OUTPUT` simulation log and re-emitting them as a plain column table that
//! plotting software can consume directly.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a clear separation of concerns:
//!
//! - **[`core`]: The Foundation.** Contains the stateless data model
//!   (`PropertyValue`, `HeaderSet`, `PropertyTable`), the `OUTPUT` log reader
//!   with its property accessors, the fixed-width table writer, and the
//!   column re-sequencing permutation.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties the reader, re-sequencer, and writer together into the complete
//!   load → parse → reorder → write pipeline used by the `dlpp` binary.

pub mod core;
pub mod workflows;
