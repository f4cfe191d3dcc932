use crate::core::models::value::PropertyValue;
use crate::core::utils::resequence;

/// Number of tabulated quantities in one `OUTPUT` property block.
pub const COLUMN_COUNT: usize = 30;

/// The ordered column names of the tabulated region.
///
/// Constructed by the log reader with the `cpu (s)` artifact already merged
/// into the single name `cpu(s)`, so every name is one whitespace-free token
/// and lookup is plain string equality.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderSet {
    names: Vec<String>,
}

impl HeaderSet {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column index of a named property.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// A copy of the header set with its names gathered through `order`.
    pub fn reordered(&self, order: &[usize]) -> Self {
        Self::new(resequence::apply(&self.names, order))
    }
}

/// The tabulated properties as per-column series, one value per retained
/// record row. All columns have the same length by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyTable {
    columns: Vec<Vec<PropertyValue>>,
}

impl PropertyTable {
    /// Transposes parsed record rows into per-column series.
    pub fn from_rows(rows: Vec<Vec<PropertyValue>>) -> Self {
        let width = rows.first().map_or(0, Vec::len);
        let mut columns: Vec<Vec<PropertyValue>> =
            (0..width).map(|_| Vec::with_capacity(rows.len())).collect();
        for row in rows {
            debug_assert_eq!(row.len(), width);
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }
        Self { columns }
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    pub fn column(&self, index: usize) -> Option<&[PropertyValue]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    pub fn columns(&self) -> &[Vec<PropertyValue>] {
        &self.columns
    }

    /// Removes the final row of every column. The last scanned record is the
    /// terminal grand-average block, not a time-series sample.
    pub fn drop_last_row(&mut self) {
        for column in &mut self.columns {
            column.pop();
        }
    }

    /// A copy of the table with its columns gathered through `order`.
    /// Column contents are untouched; only their roles change.
    pub fn reordered(&self, order: &[usize]) -> Self {
        Self {
            columns: resequence::apply(&self.columns, order),
        }
    }
}
