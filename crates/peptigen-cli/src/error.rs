use peptigen::assembly::AssemblyError;
use peptigen::core::io::xyz::XyzError;
use peptigen::core::residues::TableLoadError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error("Failed to load residue table: {0}")]
    Table(#[from] TableLoadError),

    #[error("Failed to write '{path}': {source}", path = path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: XyzError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),
}
