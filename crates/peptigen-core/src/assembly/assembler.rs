use super::error::AssemblyError;
use crate::core::io::traits::MolecularFile;
use crate::core::io::xyz::XyzFile;
use crate::core::models::molecule::Molecule;
use crate::core::residues::ResidueResolver;

/// Produces the `(index, code)` pairs of a peptide string in ascending index
/// order, invoking `visit` once per character position.
///
/// A single, finite, ordered pass; nothing is memoized or restarted.
pub fn decode_peptide(peptide: &str, mut visit: impl FnMut(usize, char)) {
    for (index, code) in peptide.chars().enumerate() {
        visit(index, code);
    }
}

/// Assembles peptide chains by loading per-residue geometry and condensing
/// the residues left to right.
#[derive(Debug, Clone)]
pub struct ChainAssembler<'a> {
    resolver: ResidueResolver<'a>,
}

impl<'a> ChainAssembler<'a> {
    pub fn new(resolver: ResidueResolver<'a>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &ResidueResolver<'a> {
        &self.resolver
    }

    /// Builds the full chain for a peptide string.
    ///
    /// The first residue's molecule becomes the accumulator; every later
    /// residue is loaded strictly after its predecessor has been merged and
    /// is consumed by the append. Residue order in the result matches
    /// character order in the peptide.
    ///
    /// # Errors
    ///
    /// Returns an [`AssemblyError`] and no partial chain if the peptide is
    /// empty, any code is unknown, any geometry file fails to load, or any
    /// append cannot find its reaction sites.
    pub fn combine(&self, peptide: &str) -> Result<Molecule, AssemblyError> {
        let mut codes = Vec::new();
        decode_peptide(peptide, |index, code| codes.push((index, code)));

        let Some((&(_, first_code), rest)) = codes.split_first() else {
            return Err(AssemblyError::EmptyPeptide);
        };

        let mut chain = self.load_residue(first_code)?;
        for &(index, code) in rest {
            let residue = self.load_residue(code)?;
            chain
                .append_amino_acid(residue)
                .map_err(|source| AssemblyError::Append {
                    index,
                    code,
                    source,
                })?;
        }
        Ok(chain)
    }

    /// Resolves and loads one residue, tagging the molecule with its
    /// canonical name.
    fn load_residue(&self, code: char) -> Result<Molecule, AssemblyError> {
        let name = self.resolver.code_to_name(code)?.to_string();
        let path = self.resolver.code_to_file(code)?;
        let (mut molecule, _) =
            XyzFile::read_from_path(&path).map_err(|source| AssemblyError::MoleculeLoad {
                path,
                source,
            })?;
        molecule.set_descr(&name);
        let atoms = molecule.atom_ids().to_vec();
        molecule.push_residue(&name, atoms);
        Ok(molecule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::residues::{ResidueTable, UnknownResidueError};
    use std::path::Path;

    const RESIDUE_XYZ: &str = "\
10
residue
N 0.0 0.0 0.0
H -0.47 0.82 0.0
H -0.47 -0.82 0.0
C 1.45 0.0 0.0
H 1.75 0.52 0.85
H 1.75 0.52 -0.85
C 2.2 -1.2 0.0
O 3.42 -1.27 0.0
O 1.57 -2.4 0.0
H 2.1 -3.2 0.0
";

    /// Writes the schematic residue geometry for every named amino acid
    /// into `dir` using the `L-<Name>.xyz` convention.
    fn write_geometry(dir: &Path, names: &[&str]) {
        for name in names {
            std::fs::write(dir.join(format!("L-{name}.xyz")), RESIDUE_XYZ).unwrap();
        }
    }

    #[test]
    fn decode_peptide_visits_every_position_in_order() {
        let mut visits = Vec::new();
        decode_peptide("ABC", |index, code| visits.push((index, code)));
        assert_eq!(visits, vec![(0, 'A'), (1, 'B'), (2, 'C')]);
    }

    #[test]
    fn decode_peptide_of_empty_string_never_visits() {
        let mut visits = 0;
        decode_peptide("", |_, _| visits += 1);
        assert_eq!(visits, 0);
    }

    #[test]
    fn combine_single_residue_loads_without_appending() {
        let dir = tempfile::tempdir().unwrap();
        write_geometry(dir.path(), &["Valine"]);
        let table = ResidueTable::standard();
        let resolver = ResidueResolver::with_xyz_dir(&table, dir.path());
        let assembler = ChainAssembler::new(resolver);

        let chain = assembler.combine("V").unwrap();
        assert_eq!(chain.num_residues(), 1);
        assert_eq!(chain.residues()[0].name, "Valine");
        // No append happened: the single loaded molecule is returned intact.
        assert_eq!(chain.num_atoms(), 10);
        assert_eq!(chain.bonds().len(), 9);
        assert_eq!(chain.descr(), "Valine");
    }

    #[test]
    fn combine_repeated_residues_appends_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write_geometry(dir.path(), &["Valine"]);
        let table = ResidueTable::standard();
        let resolver = ResidueResolver::with_xyz_dir(&table, dir.path());
        let assembler = ChainAssembler::new(resolver);

        let chain = assembler.combine("VVVVVV").unwrap();
        assert_eq!(chain.num_residues(), 6);
        // Five condensations, each losing a water's worth of atoms.
        assert_eq!(chain.num_atoms(), 10 * 6 - 3 * 5);
    }

    #[test]
    fn combine_preserves_residue_order_of_mixed_peptides() {
        let dir = tempfile::tempdir().unwrap();
        write_geometry(dir.path(), &["Glycine", "Valine"]);
        let table = ResidueTable::standard();
        let resolver = ResidueResolver::with_xyz_dir(&table, dir.path());
        let assembler = ChainAssembler::new(resolver);

        let chain = assembler.combine("GVG").unwrap();
        let names: Vec<&str> = chain.residues().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Glycine", "Valine", "Glycine"]);
    }

    #[test]
    fn combine_empty_peptide_is_a_defined_error() {
        let table = ResidueTable::standard();
        let resolver = ResidueResolver::new(&table);
        let assembler = ChainAssembler::new(resolver);

        assert!(matches!(
            assembler.combine(""),
            Err(AssemblyError::EmptyPeptide)
        ));
    }

    #[test]
    fn unknown_code_fails_without_attempting_a_load() {
        // The geometry dir does not exist; an attempted load would surface
        // as MoleculeLoad, not UnknownResidue.
        let table = ResidueTable::standard();
        let resolver = ResidueResolver::with_xyz_dir(&table, "no/such/dir");
        let assembler = ChainAssembler::new(resolver);

        assert!(matches!(
            assembler.combine("Z"),
            Err(AssemblyError::UnknownResidue(UnknownResidueError { code: 'Z' }))
        ));
    }

    #[test]
    fn unknown_code_mid_peptide_fails_the_whole_assembly() {
        let dir = tempfile::tempdir().unwrap();
        write_geometry(dir.path(), &["Valine"]);
        let table = ResidueTable::standard();
        let resolver = ResidueResolver::with_xyz_dir(&table, dir.path());
        let assembler = ChainAssembler::new(resolver);

        assert!(matches!(
            assembler.combine("VZV"),
            Err(AssemblyError::UnknownResidue(UnknownResidueError { code: 'Z' }))
        ));
    }

    #[test]
    fn missing_geometry_file_surfaces_as_molecule_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let table = ResidueTable::standard();
        let resolver = ResidueResolver::with_xyz_dir(&table, dir.path());
        let assembler = ChainAssembler::new(resolver);

        match assembler.combine("V") {
            Err(AssemblyError::MoleculeLoad { path, .. }) => {
                assert_eq!(path, dir.path().join("L-Valine.xyz"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
