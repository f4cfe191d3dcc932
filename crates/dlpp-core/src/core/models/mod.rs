//! Data structures describing one parsed simulation log: individual property
//! values, the ordered header set, and the per-column property table.

pub mod table;
pub mod value;
