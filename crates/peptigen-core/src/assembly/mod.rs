//! Peptide decoding and chain assembly.
//!
//! This is the user-facing layer of the library: it ties the residue
//! resolver, the XYZ loader, and the molecule model together to turn a
//! peptide string such as `"VVVVVV"` into a single assembled [`Molecule`].
//!
//! [`Molecule`]: crate::core::models::molecule::Molecule

mod assembler;
mod error;

pub use assembler::{ChainAssembler, decode_peptide};
pub use error::AssemblyError;
