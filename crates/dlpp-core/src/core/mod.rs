//! # Core Module
//!
//! The fundamental building blocks for DL_POLY `OUTPUT` log processing.
//!
//! The module is organized into specialized submodules:
//!
//! - **Data Model** ([`models`]) - Property values, header sets, and the
//!   per-column property table
//! - **File I/O** ([`io`]) - Reading the `OUTPUT` log format and writing the
//!   parsed column table
//! - **Utilities** ([`utils`]) - The row-major to column-major re-sequencing
//!   permutation

pub mod io;
pub mod models;
pub mod utils;
