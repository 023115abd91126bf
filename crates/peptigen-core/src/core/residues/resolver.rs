use super::table::ResidueTable;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default directory holding per-residue geometry files.
pub const DEFAULT_XYZ_DIR: &str = "molecules/Amino_Acids";

/// Raised when a one-letter code has no entry in the residue table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown residue code '{code}'")]
pub struct UnknownResidueError {
    pub code: char,
}

/// Maps one-letter amino-acid codes to canonical names and geometry file paths.
///
/// Borrows its table; resolution is a pure function of the code, so results
/// are deterministic and nothing is cached.
#[derive(Debug, Clone)]
pub struct ResidueResolver<'a> {
    table: &'a ResidueTable,
    xyz_dir: PathBuf,
}

impl<'a> ResidueResolver<'a> {
    /// Creates a resolver over `table` using [`DEFAULT_XYZ_DIR`].
    pub fn new(table: &'a ResidueTable) -> Self {
        Self::with_xyz_dir(table, DEFAULT_XYZ_DIR)
    }

    /// Creates a resolver over `table` locating geometry files under `xyz_dir`.
    pub fn with_xyz_dir<P: AsRef<Path>>(table: &'a ResidueTable, xyz_dir: P) -> Self {
        Self {
            table,
            xyz_dir: xyz_dir.as_ref().to_path_buf(),
        }
    }

    pub fn table(&self) -> &ResidueTable {
        self.table
    }

    pub fn xyz_dir(&self) -> &Path {
        &self.xyz_dir
    }

    /// The canonical full name for a code. Case-sensitive; no normalization.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownResidueError`] if the code is absent from the table.
    pub fn code_to_name(&self, code: char) -> Result<&str, UnknownResidueError> {
        self.table
            .get(code)
            .map(|amino_acid| amino_acid.name.as_str())
            .ok_or(UnknownResidueError { code })
    }

    /// The geometry file path for a code: `<xyz_dir>/L-<Name>.xyz`.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownResidueError`] if the code is absent from the table.
    pub fn code_to_file(&self, code: char) -> Result<PathBuf, UnknownResidueError> {
        let name = self.code_to_name(code)?;
        Ok(self.xyz_dir.join(format!("L-{name}.xyz")))
    }
}
