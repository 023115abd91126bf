use crate::core::io::xyz::XyzError;
use crate::core::models::molecule::AppendError;
use crate::core::residues::UnknownResidueError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors aborting a chain assembly. Assembly is all-or-nothing: whichever
/// residue fails, no partial chain is returned.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// The peptide string contained no residue codes.
    #[error("cannot assemble an empty peptide")]
    EmptyPeptide,

    /// A code had no entry in the residue table. No file load is attempted
    /// for the offending code.
    #[error(transparent)]
    UnknownResidue(#[from] UnknownResidueError),

    /// The geometry file for a resolved residue could not be loaded.
    #[error("failed to load residue geometry from '{path}': {source}", path = path.display())]
    MoleculeLoad {
        path: PathBuf,
        #[source]
        source: XyzError,
    },

    /// A loaded residue could not be condensed onto the chain.
    #[error("failed to append residue {index} ('{code}') to the chain: {source}")]
    Append {
        index: usize,
        code: char,
        #[source]
        source: AppendError,
    },
}
