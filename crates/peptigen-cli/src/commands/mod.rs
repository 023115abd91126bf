pub mod assemble;
pub mod residues;
pub mod rotate;

use crate::cli::SourceArgs;
use crate::error::Result;
use peptigen::core::residues::{ResidueResolver, ResidueTable};

/// Builds the residue table from the `--table` override or the built-in
/// twenty standard amino acids.
pub(crate) fn load_table(source: &SourceArgs) -> Result<ResidueTable> {
    match &source.table {
        Some(path) => Ok(ResidueTable::load(path)?),
        None => Ok(ResidueTable::standard()),
    }
}

/// Builds a resolver over `table`, honoring the `--geometry-dir` override.
pub(crate) fn make_resolver<'a>(
    table: &'a ResidueTable,
    source: &SourceArgs,
) -> ResidueResolver<'a> {
    match &source.geometry_dir {
        Some(dir) => ResidueResolver::with_xyz_dir(table, dir),
        None => ResidueResolver::new(table),
    }
}
