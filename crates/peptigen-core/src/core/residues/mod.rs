mod resolver;
mod table;

pub use resolver::{DEFAULT_XYZ_DIR, ResidueResolver, UnknownResidueError};
pub use table::{AminoAcid, ResidueTable, TableLoadError};
