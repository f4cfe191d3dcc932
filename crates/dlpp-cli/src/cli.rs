use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Sam Harding",
    version,
    about = "dlpp - Extracts the tabulated physical properties from a DL_POLY OUTPUT simulation log into a column-aligned table for plotting software.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the DL_POLY simulation log to parse.
    #[arg(short, long, value_name = "PATH", default_value = "OUTPUT")]
    pub input: PathBuf,

    /// Path for the parsed column table.
    #[arg(short, long, value_name = "PATH", default_value = "parsed.txt")]
    pub output: PathBuf,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
