//! Error types for the command-line front end.

use gd_graph::LoadError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Failed to write output: {0}")]
    Output(std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
