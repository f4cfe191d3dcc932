use crate::core::models::table::{COLUMN_COUNT, HeaderSet, PropertyTable};
use crate::core::models::value::PropertyValue;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// The dashed line delimiting tabulated sections of an `OUTPUT` file,
/// recognized by exact match: one leading space and 120 dashes.
pub const SEPARATOR: &str = " ------------------------------------------------------------------------------------------------------------------------";

/// Tokens per physical line of a property block. A separator starts a data
/// record when the line right after it splits into exactly this many tokens.
///
/// The lineage of this tool also qualified records by raw line width; the
/// token count is used here because it is independent of line-ending
/// representation, and it is applied consistently to every scan.
pub const TOKENS_PER_LINE: usize = 10;

/// Columns with no rolling average in the source format.
pub const TIME_DOMAIN_COLUMNS: [&str; 3] = ["step", "time(ps)", "cpu(s)"];

/// Lines from a record's first value line down to its rolling-average block.
const ROLLING_AVERAGE_OFFSET: usize = 4;

/// Lines per property block.
const LINES_PER_BLOCK: usize = 3;

const UNIT_TOKEN: &str = "(s)";
const CPU_TOKEN: &str = "cpu";
const CPU_HEADER: &str = "cpu(s)";

#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("no separator line in input; not a DL_POLY OUTPUT file?")]
    SeparatorNotFound,
    #[error("malformed header block: token '{token}' not found")]
    MalformedHeader { token: String },
    #[error("no property named '{name}' in the header set")]
    UnknownProperty { name: String },
    #[error("no data record qualifies after any separator")]
    NoRecords,
    #[error("'{name}' is a time-domain column and has no rolling average")]
    NoRollingAverage { name: String },
}

/// A DL_POLY `OUTPUT` simulation log held in memory.
///
/// The full line list is immutable once loaded. Everything before the first
/// separator is the run-input echo; the tabulated region starts at the
/// separator itself and is the part the per-record scans operate on.
#[derive(Debug, Clone)]
pub struct OutputLog {
    lines: Vec<String>,
    table_start: usize,
}

impl OutputLog {
    /// Reads a log from a buffered reader and locates the tabulated region.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::SeparatorNotFound`] if the separator literal never
    /// occurs, and propagates underlying I/O errors.
    pub fn read_from(reader: &mut impl BufRead) -> Result<Self, LogError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        let table_start = lines
            .iter()
            .position(|line| line == SEPARATOR)
            .ok_or(LogError::SeparatorNotFound)?;
        Ok(Self { lines, table_start })
    }

    /// Reads a log from a file path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// The tabulated region: the first separator line onward.
    fn table_lines(&self) -> &[String] {
        &self.lines[self.table_start..]
    }

    /// Recovers the 30 column names from the three header lines at offsets
    /// 2, 3 and 4 of the tabulated region.
    ///
    /// The source format prints the cpu header as the two tokens `cpu (s)`;
    /// the orphaned unit token is removed once and merged into `cpu(s)`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::MalformedHeader`] if `(s)` or `cpu` is absent.
    pub fn headers(&self) -> Result<HeaderSet, LogError> {
        let mut names: Vec<String> = self
            .table_lines()
            .iter()
            .skip(2)
            .take(LINES_PER_BLOCK)
            .flat_map(|line| line.split_whitespace())
            .map(str::to_string)
            .collect();

        let unit = names
            .iter()
            .position(|token| token == UNIT_TOKEN)
            .ok_or_else(|| LogError::MalformedHeader {
                token: UNIT_TOKEN.to_string(),
            })?;
        names.remove(unit);

        let cpu = names
            .iter()
            .position(|token| token == CPU_TOKEN)
            .ok_or_else(|| LogError::MalformedHeader {
                token: CPU_TOKEN.to_string(),
            })?;
        names[cpu] = CPU_HEADER.to_string();

        Ok(HeaderSet::new(names))
    }

    /// Indices (within the tabulated region) of every separator that starts
    /// a qualifying data record: the next line splits into exactly
    /// [`TOKENS_PER_LINE`] tokens and the block totals [`COLUMN_COUNT`].
    fn record_starts(&self) -> Vec<usize> {
        let lines = self.table_lines();
        (0..lines.len())
            .filter(|&index| {
                lines[index] == SEPARATOR
                    && lines
                        .get(index + 1)
                        .is_some_and(|next| next.split_whitespace().count() == TOKENS_PER_LINE)
                    && self.block_tokens(index + 1).len() == COLUMN_COUNT
            })
            .collect()
    }

    /// The whitespace-split tokens of the three block lines starting at
    /// `first_line` within the tabulated region.
    fn block_tokens(&self, first_line: usize) -> Vec<&str> {
        self.table_lines()
            .iter()
            .skip(first_line)
            .take(LINES_PER_BLOCK)
            .flat_map(|line| line.split_whitespace())
            .collect()
    }

    fn parse_column(index: usize, token: &str) -> PropertyValue {
        if index == 0 {
            PropertyValue::step(token)
        } else {
            PropertyValue::number(token)
        }
    }

    /// Extracts every qualifying record into a per-column table, with the
    /// terminal grand-average row already dropped.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::NoRecords`] if no record qualifies at all.
    pub fn property_table(&self) -> Result<PropertyTable, LogError> {
        let rows: Vec<Vec<PropertyValue>> = self
            .record_starts()
            .into_iter()
            .map(|start| {
                self.block_tokens(start + 1)
                    .into_iter()
                    .enumerate()
                    .map(|(index, token)| Self::parse_column(index, token))
                    .collect()
            })
            .collect();

        if rows.is_empty() {
            return Err(LogError::NoRecords);
        }

        let mut table = PropertyTable::from_rows(rows);
        table.drop_last_row();
        Ok(table)
    }

    /// The full series of a named column, terminal average excluded.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::UnknownProperty`] if `name` is not a header.
    pub fn property(
        &self,
        headers: &HeaderSet,
        name: &str,
    ) -> Result<Vec<PropertyValue>, LogError> {
        let index = headers
            .position(name)
            .ok_or_else(|| LogError::UnknownProperty {
                name: name.to_string(),
            })?;

        let mut series: Vec<PropertyValue> = self
            .record_starts()
            .into_iter()
            .map(|start| Self::parse_column(index, self.block_tokens(start + 1)[index]))
            .collect();
        series.pop();
        Ok(series)
    }

    /// The rolling-average series of a named column, terminal average
    /// excluded.
    ///
    /// The averages block sits [`ROLLING_AVERAGE_OFFSET`] lines below a
    /// record's first value line. It has no slot for the `cpu(s)` column, so
    /// header indices beyond that position sit one slot earlier.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::NoRollingAverage`] for the time-domain columns
    /// and [`LogError::UnknownProperty`] for unknown names.
    pub fn rolling_average(
        &self,
        headers: &HeaderSet,
        name: &str,
    ) -> Result<Vec<PropertyValue>, LogError> {
        if TIME_DOMAIN_COLUMNS.contains(&name) {
            return Err(LogError::NoRollingAverage {
                name: name.to_string(),
            });
        }

        let mut index = headers
            .position(name)
            .ok_or_else(|| LogError::UnknownProperty {
                name: name.to_string(),
            })?;
        if let Some(cpu) = headers.position(CPU_HEADER) {
            if index > cpu {
                index -= 1;
            }
        }

        let mut series: Vec<PropertyValue> = self
            .record_starts()
            .into_iter()
            .map(|start| {
                // The terminal grand-average block has no rolling rows below
                // it; its placeholder is discarded with the pop below.
                match self
                    .block_tokens(start + 1 + ROLLING_AVERAGE_OFFSET)
                    .get(index)
                {
                    Some(token) => PropertyValue::number(token),
                    None => PropertyValue::Text(String::new()),
                }
            })
            .collect();
        series.pop();
        Ok(series)
    }

    /// The single total-average value of a named column, read from the block
    /// after the second-to-last separator of the full line sequence.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::UnknownProperty`] for unknown names and
    /// [`LogError::NoRecords`] if the log has no final-averages block.
    pub fn final_average(
        &self,
        headers: &HeaderSet,
        name: &str,
    ) -> Result<PropertyValue, LogError> {
        let index = headers
            .position(name)
            .ok_or_else(|| LogError::UnknownProperty {
                name: name.to_string(),
            })?;

        let separators: Vec<usize> = (0..self.lines.len())
            .filter(|&i| self.lines[i] == SEPARATOR)
            .collect();
        if separators.len() < 2 {
            return Err(LogError::NoRecords);
        }
        let start = separators[separators.len() - 2];

        let tokens: Vec<&str> = self
            .lines
            .iter()
            .skip(start + 1)
            .take(LINES_PER_BLOCK)
            .flat_map(|line| line.split_whitespace())
            .collect();
        match tokens.get(index) {
            Some(token) => Ok(Self::parse_column(index, token)),
            None => Err(LogError::NoRecords),
        }
    }
}
