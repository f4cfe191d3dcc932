use dlpolyparse::core::io::output_log::LogError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] LogError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
