//! # Peptigen Core Library
//!
//! A library for assembling peptide chain geometry from per-residue XYZ
//! fragments, one amino acid at a time.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict dependency direction:
//!
//! - **[`core`]: The Foundation.** Contains the stateless molecular data model
//!   (`Molecule`, `Atom`, `Element`), XYZ file I/O, the amino-acid residue
//!   table and resolver, and small geometry utilities.
//!
//! - **[`assembly`]: The Public API.** The user-facing layer that decodes a
//!   peptide string, resolves each code to a geometry file, and folds the
//!   loaded residues into a single chain via peptide-bond condensation.

pub mod assembly;
pub mod core;
