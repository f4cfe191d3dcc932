//! Input/output for the two file formats this crate touches: the DL_POLY
//! `OUTPUT` simulation log on the way in, and the column-aligned parsed
//! table on the way out.

pub mod output_log;
pub mod parsed_table;
