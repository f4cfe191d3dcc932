use crate::core::io::output_log::{LogError, OutputLog, TOKENS_PER_LINE};
use crate::core::io::parsed_table;
use crate::core::utils::resequence;
use std::path::Path;
use tracing::info;

/// Summary of one completed parse run.
#[derive(Debug, Clone, Copy)]
pub struct ParseReport {
    pub columns: usize,
    pub rows: usize,
}

/// Runs the whole pipeline: load the simulation log, extract headers and
/// records, re-sequence both column-major, and write the parsed table.
///
/// # Errors
///
/// Propagates every [`LogError`]: missing separator, malformed header block,
/// no qualifying records, or I/O failure on either file.
pub fn run(input: &Path, output: &Path) -> Result<ParseReport, LogError> {
    info!("Reading simulation log from '{}'.", input.display());
    let log = OutputLog::read_from_path(input)?;

    let headers = log.headers()?;
    let table = log.property_table()?;
    info!(
        "Extracted {} columns x {} rows of tabulated properties.",
        table.n_columns(),
        table.n_rows()
    );

    // The same gather order is applied to the header list and the column
    // list, so names and series stay aligned.
    let order = resequence::permutation(headers.len(), TOKENS_PER_LINE);
    let headers = headers.reordered(&order);
    let table = table.reordered(&order);

    parsed_table::write_to_path(&headers, &table, output)?;
    info!("Wrote parsed table to '{}'.", output.display());

    Ok(ParseReport {
        columns: table.n_columns(),
        rows: table.n_rows(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::output_log::SEPARATOR;
    use crate::core::models::table::COLUMN_COUNT;
    use std::fmt::Write as _;

    /// The minimal synthetic input: a header section and three records, the
    /// last of which is the terminal grand average.
    fn minimal_log() -> String {
        let mut text = String::new();
        writeln!(text, "DL_POLY synthetic test run").unwrap();
        writeln!(text, "{}", SEPARATOR).unwrap();
        writeln!(text).unwrap();
        writeln!(
            text,
            "step eng_tot temp_tot eng_cfg eng_vdw eng_cou eng_bnd eng_ang eng_dih eng_tet"
        )
        .unwrap();
        writeln!(
            text,
            "time(ps) eng_pv temp_rot vir_cfg vir_vdw vir_cou vir_bnd vir_ang vir_con vir_tet"
        )
        .unwrap();
        writeln!(
            text,
            "cpu (s) volume temp_shl eng_shl vir_shl alpha beta gamma vir_pmf press"
        )
        .unwrap();

        for step in [100, 200, 300] {
            writeln!(text, "{}", SEPARATOR).unwrap();
            let mut tokens: Vec<String> = vec![step.to_string()];
            for column in 1..COLUMN_COUNT {
                tokens.push(format!("{:.1}", step as f64 + column as f64));
            }
            writeln!(text, "  {}", tokens[0..10].join("  ")).unwrap();
            writeln!(text, "  {}", tokens[10..20].join("  ")).unwrap();
            writeln!(text, "  {}", tokens[20..30].join("  ")).unwrap();
        }
        text
    }

    #[test]
    fn pipeline_writes_a_header_line_and_all_retained_rows() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("OUTPUT");
        let output = dir.path().join("parsed.txt");
        std::fs::write(&input, minimal_log()).unwrap();

        let report = run(&input, &output).unwrap();
        assert_eq!(report.columns, COLUMN_COUNT);
        assert_eq!(report.rows, 2);

        let written = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn pipeline_emits_columns_in_stride_gather_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("OUTPUT");
        let output = dir.path().join("parsed.txt");
        std::fs::write(&input, minimal_log()).unwrap();

        run(&input, &output).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        let header_names: Vec<&str> = written.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(
            &header_names[..6],
            &["step", "time(ps)", "cpu(s)", "eng_tot", "eng_pv", "volume"]
        );
        assert_eq!(header_names.last(), Some(&"press"));

        // The step field of the first data row round-trips as an integer.
        let first_row = written.lines().nth(1).unwrap();
        let step: i64 = first_row.split_whitespace().next().unwrap().parse().unwrap();
        assert_eq!(step, 100);
    }

    #[test]
    fn pipeline_surfaces_a_missing_separator() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("OUTPUT");
        std::fs::write(&input, "not a simulation log\n").unwrap();

        let result = run(&input, &dir.path().join("parsed.txt"));
        assert!(matches!(result, Err(LogError::SeparatorNotFound)));
    }
}
