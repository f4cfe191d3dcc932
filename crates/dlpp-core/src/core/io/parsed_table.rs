use crate::core::models::table::{HeaderSet, PropertyTable};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Width of one header field in the emitted table.
pub const HEADER_FIELD_WIDTH: usize = 12;

/// Width of one value field; every field is followed by a single space.
pub const VALUE_FIELD_WIDTH: usize = 11;

/// Renders headers and column series as a left-justified fixed-width table.
///
/// One header line, then one line per row, newline-separated with no
/// trailing newline. No escaping is performed; retained raw tokens such as
/// the asterisk overflow sentinel are emitted verbatim.
pub fn write_to(
    headers: &HeaderSet,
    table: &PropertyTable,
    writer: &mut impl Write,
) -> io::Result<()> {
    for name in headers.names() {
        write!(writer, "{:<width$}", name, width = HEADER_FIELD_WIDTH)?;
    }
    for row in 0..table.n_rows() {
        writeln!(writer)?;
        for column in table.columns() {
            write!(writer, "{:<width$} ", column[row], width = VALUE_FIELD_WIDTH)?;
        }
    }
    Ok(())
}

/// Writes the table to a file path, creating or truncating it.
pub fn write_to_path<P: AsRef<Path>>(
    headers: &HeaderSet,
    table: &PropertyTable,
    path: P,
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_to(headers, table, &mut writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::value::PropertyValue;

    fn sample() -> (HeaderSet, PropertyTable) {
        let headers = HeaderSet::new(vec![
            "step".to_string(),
            "eng_tot".to_string(),
            "press".to_string(),
        ]);
        let table = PropertyTable::from_rows(vec![
            vec![
                PropertyValue::Step(100),
                PropertyValue::Number(-1.5),
                PropertyValue::Number(0.25),
            ],
            vec![
                PropertyValue::Step(200),
                PropertyValue::Number(2.5),
                PropertyValue::Text("********".to_string()),
            ],
        ]);
        (headers, table)
    }

    fn render(headers: &HeaderSet, table: &PropertyTable) -> String {
        let mut buffer = Vec::new();
        write_to(headers, table, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn header_fields_are_left_justified_to_twelve_characters() {
        let (headers, table) = sample();
        let rendered = render(&headers, &table);
        let header_line = rendered.lines().next().unwrap();
        assert_eq!(header_line, "step        eng_tot     press       ");
    }

    #[test]
    fn value_fields_are_left_justified_to_eleven_plus_a_space() {
        let (headers, table) = sample();
        let rendered = render(&headers, &table);
        let rows: Vec<&str> = rendered.lines().skip(1).collect();
        assert_eq!(rows[0], "100         -1.5        0.25        ");
        assert_eq!(rows[1], "200         2.5         ********    ");
    }

    #[test]
    fn rows_are_newline_separated_without_a_trailing_newline() {
        let (headers, table) = sample();
        let rendered = render(&headers, &table);
        assert_eq!(rendered.lines().count(), 3);
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn empty_table_renders_only_the_header_line() {
        let (headers, _) = sample();
        let rendered = render(&headers, &PropertyTable::default());
        assert_eq!(rendered.lines().count(), 1);
    }

    #[test]
    fn step_token_round_trips_through_the_rendered_field() {
        let (headers, table) = sample();
        let rendered = render(&headers, &table);
        let first_row = rendered.lines().nth(1).unwrap();
        let token = first_row.split_whitespace().next().unwrap();
        assert_eq!(token.parse::<i64>().unwrap(), 100);
    }

    #[test]
    fn write_to_path_creates_the_output_file() {
        let (headers, table) = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parsed.txt");

        write_to_path(&headers, &table, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(&headers, &table));
    }
}
