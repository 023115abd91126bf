use crate::core::io::traits::MolecularFile;
use crate::core::models::atom::Atom;
use crate::core::models::element::Element;
use crate::core::models::molecule::Molecule;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XyzMetadata {
    pub comment: String,
}

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: XyzParseErrorKind,
    },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum XyzParseErrorKind {
    #[error("Invalid atom count (value: '{value}')")]
    InvalidAtomCount { value: String },
    #[error("Atom record requires an element symbol and three coordinates")]
    MalformedAtomRecord,
    #[error("Unknown element symbol '{symbol}'")]
    UnknownElement { symbol: String },
    #[error("Invalid coordinate value '{value}'")]
    InvalidCoordinate { value: String },
}

/// XYZ coordinate files: an atom count line, a comment line, then one
/// `Element x y z` record per atom. Bond detection runs after reading, so a
/// loaded molecule is connectivity-complete.
pub struct XyzFile;

impl MolecularFile for XyzFile {
    type Metadata = XyzMetadata;
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<(Molecule, Self::Metadata), Self::Error> {
        let mut lines = reader.lines();

        let count_line = lines
            .next()
            .ok_or_else(|| XyzError::MissingRecord("atom count line".into()))??;
        let count: usize = count_line
            .trim()
            .parse()
            .map_err(|_| XyzError::Parse {
                line: 1,
                kind: XyzParseErrorKind::InvalidAtomCount {
                    value: count_line.trim().into(),
                },
            })?;
        if count == 0 {
            return Err(XyzError::MissingRecord("atom records".into()));
        }

        let comment = lines
            .next()
            .ok_or_else(|| XyzError::MissingRecord("comment line".into()))??;
        let comment = comment.trim().to_string();

        let mut molecule = Molecule::new(&comment);
        for index in 0..count {
            let line_num = index + 3;
            let line = lines
                .next()
                .ok_or_else(|| XyzError::MissingRecord(format!("atom record {}", index + 1)))??;

            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 4 {
                return Err(XyzError::Parse {
                    line: line_num,
                    kind: XyzParseErrorKind::MalformedAtomRecord,
                });
            }

            let element = Element::from_str(parts[0]).map_err(|_| XyzError::Parse {
                line: line_num,
                kind: XyzParseErrorKind::UnknownElement {
                    symbol: parts[0].into(),
                },
            })?;
            let mut coords = [0.0f64; 3];
            for (slot, value) in coords.iter_mut().zip(&parts[1..4]) {
                *slot = value.parse().map_err(|_| XyzError::Parse {
                    line: line_num,
                    kind: XyzParseErrorKind::InvalidCoordinate {
                        value: (*value).into(),
                    },
                })?;
            }

            molecule.add_atom(Atom::new(
                element,
                Point3::new(coords[0], coords[1], coords[2]),
            ));
        }

        molecule.detect_bonds();
        Ok((molecule, XyzMetadata { comment }))
    }

    fn write_to(
        molecule: &Molecule,
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        writeln!(writer, "{}", molecule.num_atoms())?;
        writeln!(writer, "{}", metadata.comment)?;
        for (_, atom) in molecule.atoms_iter() {
            writeln!(
                writer,
                "{:<2} {:>12.6} {:>12.6} {:>12.6}",
                atom.element, atom.position.x, atom.position.y, atom.position.z
            )?;
        }
        Ok(())
    }

    fn write_molecule_to(
        molecule: &Molecule,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        let metadata = XyzMetadata {
            comment: molecule.descr().to_string(),
        };
        Self::write_to(molecule, &metadata, writer)
    }
}
