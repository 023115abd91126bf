use phf::{Map, phf_map};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::path::Path;
use thiserror::Error;

/// Canonical names of the twenty standard amino acids, keyed by their
/// one-letter code. Names double as geometry file stems (`L-<Name>.xyz`).
static STANDARD_AMINO_ACIDS: Map<char, &'static str> = phf_map! {
    'A' => "Alanine",
    'R' => "Arginine",
    'N' => "Asparagine",
    'D' => "Aspartic_Acid",
    'C' => "Cysteine",
    'E' => "Glutamic_Acid",
    'Q' => "Glutamine",
    'G' => "Glycine",
    'H' => "Histidine",
    'I' => "Isoleucine",
    'L' => "Leucine",
    'K' => "Lysine",
    'M' => "Methionine",
    'F' => "Phenylalanine",
    'P' => "Proline",
    'S' => "Serine",
    'T' => "Threonine",
    'W' => "Tryptophan",
    'Y' => "Tyrosine",
    'V' => "Valine",
};

/// One residue record: at minimum the canonical name used to locate its
/// geometry file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AminoAcid {
    pub name: String,
}

/// A read-only code-to-residue table.
///
/// Constructed once and passed by reference into the resolver, so alternate
/// tables (e.g. non-standard residues in tests) can be substituted without
/// touching global state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidueTable {
    entries: BTreeMap<char, AminoAcid>,
}

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Residue code '{0}' is not a single character")]
    InvalidCode(String),
}

impl ResidueTable {
    /// The table of the twenty standard amino acids.
    pub fn standard() -> Self {
        let entries = STANDARD_AMINO_ACIDS
            .entries()
            .map(|(&code, &name)| {
                (
                    code,
                    AminoAcid {
                        name: name.to_string(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Builds a table from explicit entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (char, AminoAcid)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Loads a table from a TOML file mapping one-letter codes to residue
    /// records (`V = { name = "Valine" }`).
    ///
    /// # Errors
    ///
    /// Returns a [`TableLoadError`] if the file cannot be read, is not valid
    /// TOML, or contains a key that is not a single character.
    pub fn load(path: &Path) -> Result<Self, TableLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| TableLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let raw: BTreeMap<String, AminoAcid> =
            toml::from_str(&content).map_err(|e| TableLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;

        let mut entries = BTreeMap::new();
        for (key, amino_acid) in raw {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(code), None) => {
                    entries.insert(code, amino_acid);
                }
                _ => return Err(TableLoadError::InvalidCode(key)),
            }
        }
        Ok(Self { entries })
    }

    /// Exact, case-sensitive lookup; no normalization is performed.
    pub fn get(&self, code: char) -> Option<&AminoAcid> {
        self.entries.get(&code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in code order.
    pub fn iter(&self) -> btree_map::Iter<'_, char, AminoAcid> {
        self.entries.iter()
    }
}
