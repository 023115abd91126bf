use super::atom::Atom;
use super::element::Element;
use super::ids::AtomId;
use nalgebra::{Point3, Rotation3, Vector3};
use slotmap::{SecondaryMap, SlotMap};
use thiserror::Error;

/// Allowed deviation from the sum of covalent radii when detecting bonds, in Angstroms.
const BOND_DISTANCE_TOLERANCE: f64 = 0.2;

/// Length of the amide C-N bond formed during peptide condensation, in Angstroms.
const PEPTIDE_BOND_LENGTH: f64 = 1.33;

/// A covalent bond between two atoms of the same molecule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bond {
    pub atom1: AtomId,
    pub atom2: AtomId,
}

impl Bond {
    pub fn new(atom1: AtomId, atom2: AtomId) -> Self {
        Self { atom1, atom2 }
    }

    pub fn contains(&self, id: AtomId) -> bool {
        self.atom1 == id || self.atom2 == id
    }
}

/// One residue's slice of a molecule: a name and the atoms contributed by it,
/// in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub name: String,
    atoms: Vec<AtomId>,
}

impl Residue {
    fn new(name: &str, atoms: Vec<AtomId>) -> Self {
        Self {
            name: name.to_string(),
            atoms,
        }
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }
}

/// The carboxyl group terminating a chain, as found by [`Molecule::find_c_terminus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CTerminus {
    pub carbon: AtomId,
    pub hydroxyl_oxygen: AtomId,
    pub hydroxyl_hydrogen: AtomId,
}

/// The free amine group of a residue, as found by [`Molecule::find_n_terminus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NTerminus {
    pub nitrogen: AtomId,
    pub hydrogen: AtomId,
}

/// Errors raised when a peptide-bond append cannot identify its reaction sites.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppendError {
    /// The growing chain has no carboxyl carbon with a hydroxyl group left to react.
    #[error("chain has no free carboxyl C-terminus to extend")]
    MissingCTerminus,
    /// The incoming residue has no amine nitrogen carrying at least two hydrogens.
    #[error("incoming residue has no free amine N-terminus")]
    MissingNTerminus,
}

/// A molecule: atoms, bonds, and the residue records of the fragments it was
/// assembled from.
///
/// Atoms are stored in a slot map and additionally kept in an explicit
/// insertion-order list, since several operations (terminus search, last-residue
/// queries) depend on encounter order, which slot iteration does not preserve
/// across removals. Bond connectivity is cached as an adjacency list per atom.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    descr: String,
    atoms: SlotMap<AtomId, Atom>,
    atom_order: Vec<AtomId>,
    bonds: Vec<Bond>,
    bond_adjacency: SecondaryMap<AtomId, Vec<AtomId>>,
    residues: Vec<Residue>,
}

impl Molecule {
    /// Creates an empty molecule with a free-form description.
    pub fn new(descr: &str) -> Self {
        Self {
            descr: descr.to_string(),
            ..Default::default()
        }
    }

    pub fn descr(&self) -> &str {
        &self.descr
    }

    pub fn set_descr(&mut self, descr: &str) {
        self.descr = descr.to_string();
    }

    pub fn num_atoms(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    pub fn atom_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(id)
    }

    /// Atom ids in insertion order.
    pub fn atom_ids(&self) -> &[AtomId] {
        &self.atom_order
    }

    /// Iterates over atoms in insertion order.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atom_order.iter().map(|&id| (id, &self.atoms[id]))
    }

    /// Adds an atom and returns its id. The atom is appended to the insertion
    /// order and starts with an empty adjacency list.
    pub fn add_atom(&mut self, atom: Atom) -> AtomId {
        let id = self.atoms.insert(atom);
        self.atom_order.push(id);
        self.bond_adjacency.insert(id, Vec::new());
        id
    }

    /// Adds a bond between two existing atoms.
    ///
    /// Idempotent; adding a bond that already exists succeeds without
    /// creating duplicates. Returns `None` if either atom does not exist.
    pub fn add_bond(&mut self, atom1: AtomId, atom2: AtomId) -> Option<()> {
        if !self.atoms.contains_key(atom1) || !self.atoms.contains_key(atom2) {
            return None;
        }
        if let Some(neighbors) = self.bond_adjacency.get(atom1) {
            if neighbors.contains(&atom2) {
                return Some(());
            }
        }
        self.bonds.push(Bond::new(atom1, atom2));
        self.bond_adjacency[atom1].push(atom2);
        self.bond_adjacency[atom2].push(atom1);
        Some(())
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// The atoms directly bonded to `id`, or `None` if the atom does not exist.
    pub fn bonded_neighbors(&self, id: AtomId) -> Option<&[AtomId]> {
        self.bond_adjacency.get(id).map(|v| v.as_slice())
    }

    /// Removes an atom together with its bonds, its adjacency entries, and its
    /// membership in any residue record.
    pub fn remove_atom(&mut self, id: AtomId) -> Option<Atom> {
        let atom = self.atoms.remove(id)?;

        self.atom_order.retain(|&other| other != id);

        let bonds = std::mem::take(&mut self.bonds);
        self.bonds = bonds.into_iter().filter(|b| !b.contains(id)).collect();

        let neighbors = self.bond_adjacency.remove(id).unwrap_or_default();
        for neighbor in neighbors {
            if let Some(adjacency) = self.bond_adjacency.get_mut(neighbor) {
                adjacency.retain(|&other| other != id);
            }
        }

        for residue in &mut self.residues {
            residue.atoms.retain(|&other| other != id);
        }

        Some(atom)
    }

    /// Records that `atoms` make up one residue named `name`.
    ///
    /// Residue records are ordered; the order of calls is the residue order of
    /// the chain.
    pub fn push_residue(&mut self, name: &str, atoms: Vec<AtomId>) {
        self.residues.push(Residue::new(name, atoms));
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn num_residues(&self) -> usize {
        self.residues.len()
    }

    /// The atoms of the most recently appended residue, if any residue records exist.
    pub fn last_residue_atoms(&self) -> Option<&[AtomId]> {
        self.residues.last().map(|r| r.atoms())
    }

    /// First atom of the given element in insertion order.
    pub fn find_first(&self, element: Element) -> Option<AtomId> {
        self.atom_order
            .iter()
            .copied()
            .find(|&id| self.atoms[id].element == element)
    }

    /// Last atom of the given element in insertion order.
    pub fn find_last(&self, element: Element) -> Option<AtomId> {
        self.atom_order
            .iter()
            .rev()
            .copied()
            .find(|&id| self.atoms[id].element == element)
    }

    /// Rotates every atom position about the origin.
    pub fn apply_rotation(&mut self, rotation: &Rotation3<f64>) {
        for atom in self.atoms.values_mut() {
            atom.position = rotation * atom.position;
        }
    }

    /// Shifts every atom position by `shift`.
    pub fn translate(&mut self, shift: &Vector3<f64>) {
        for atom in self.atoms.values_mut() {
            atom.position += shift;
        }
    }

    /// Re-expresses all positions relative to `point`.
    pub fn center_at(&mut self, point: &Point3<f64>) {
        for atom in self.atoms.values_mut() {
            atom.position -= point.coords;
        }
    }

    /// Rebuilds the bond list from interatomic distances.
    ///
    /// Two atoms are considered bonded when their distance is below the sum of
    /// their covalent radii plus a fixed tolerance. Any previously recorded
    /// bonds are discarded.
    pub fn detect_bonds(&mut self) {
        self.bonds.clear();
        for &id in &self.atom_order {
            self.bond_adjacency[id].clear();
        }

        for (i, &id_a) in self.atom_order.iter().enumerate() {
            for &id_b in self.atom_order.iter().skip(i + 1) {
                let a = &self.atoms[id_a];
                let b = &self.atoms[id_b];
                let threshold = Element::avg_bond_distance(a.element, b.element)
                    + BOND_DISTANCE_TOLERANCE;
                if a.distance_to(b) < threshold {
                    self.bonds.push(Bond::new(id_a, id_b));
                    self.bond_adjacency[id_a].push(id_b);
                    self.bond_adjacency[id_b].push(id_a);
                }
            }
        }
    }

    /// Finds the chain's reactive carboxyl group, scanning from the end of the
    /// insertion order.
    ///
    /// The C-terminus is a carbon bonded to exactly two oxygens, one of which
    /// carries a hydrogen (the hydroxyl). A carboxyl that already reacted has
    /// lost its hydroxyl oxygen and no longer matches.
    pub fn find_c_terminus(&self) -> Option<CTerminus> {
        for &id in self.atom_order.iter().rev() {
            if self.atoms[id].element != Element::Carbon {
                continue;
            }
            let neighbors = self.bonded_neighbors(id)?;
            let oxygens: Vec<AtomId> = neighbors
                .iter()
                .copied()
                .filter(|&n| self.atoms[n].element == Element::Oxygen)
                .collect();
            if oxygens.len() != 2 {
                continue;
            }
            for &oxygen in &oxygens {
                let hydrogen = self
                    .bonded_neighbors(oxygen)?
                    .iter()
                    .copied()
                    .find(|&n| self.atoms[n].element == Element::Hydrogen);
                if let Some(hydrogen) = hydrogen {
                    return Some(CTerminus {
                        carbon: id,
                        hydroxyl_oxygen: oxygen,
                        hydroxyl_hydrogen: hydrogen,
                    });
                }
            }
        }
        None
    }

    /// Finds the residue's free amine group, scanning from the start of the
    /// insertion order.
    ///
    /// The N-terminus is a nitrogen carrying at least two hydrogens; the
    /// returned hydrogen is the one given up during condensation.
    pub fn find_n_terminus(&self) -> Option<NTerminus> {
        for &id in &self.atom_order {
            if self.atoms[id].element != Element::Nitrogen {
                continue;
            }
            let hydrogens: Vec<AtomId> = self
                .bonded_neighbors(id)?
                .iter()
                .copied()
                .filter(|&n| self.atoms[n].element == Element::Hydrogen)
                .collect();
            if hydrogens.len() >= 2 {
                return Some(NTerminus {
                    nitrogen: id,
                    hydrogen: hydrogens[0],
                });
            }
        }
        None
    }

    /// Extends this chain by one residue via peptide-bond condensation,
    /// consuming the incoming molecule.
    ///
    /// The chain loses its hydroxyl oxygen and hydrogen, the incoming residue
    /// loses one amine hydrogen, and the incoming fragment is rigidly
    /// translated so its nitrogen sits at amide-bond distance from the chain's
    /// carboxyl carbon, along the direction the hydroxyl oxygen occupied.
    /// Atoms, bonds, and residue records merge in encounter order.
    ///
    /// # Errors
    ///
    /// Returns an [`AppendError`] if either reaction site cannot be identified;
    /// the chain is left unmodified in that case.
    pub fn append_amino_acid(&mut self, mut other: Molecule) -> Result<(), AppendError> {
        let c_term = self.find_c_terminus().ok_or(AppendError::MissingCTerminus)?;
        let n_term = other.find_n_terminus().ok_or(AppendError::MissingNTerminus)?;

        let carbon_pos = self.atoms[c_term.carbon].position;
        let hydroxyl_pos = self.atoms[c_term.hydroxyl_oxygen].position;
        let direction = (hydroxyl_pos - carbon_pos).normalize();
        let nitrogen_target = carbon_pos + direction * PEPTIDE_BOND_LENGTH;

        self.remove_atom(c_term.hydroxyl_hydrogen);
        self.remove_atom(c_term.hydroxyl_oxygen);
        other.remove_atom(n_term.hydrogen);

        let shift = nitrogen_target - other.atoms[n_term.nitrogen].position;
        other.translate(&shift);

        let mut id_map: SecondaryMap<AtomId, AtomId> = SecondaryMap::new();
        for old_id in other.atom_order.clone() {
            let new_id = self.add_atom(other.atoms[old_id].clone());
            id_map.insert(old_id, new_id);
        }
        for bond in &other.bonds {
            let _ = self.add_bond(id_map[bond.atom1], id_map[bond.atom2]);
        }
        for residue in &other.residues {
            let atoms = residue.atoms.iter().map(|&id| id_map[id]).collect();
            self.residues.push(Residue::new(&residue.name, atoms));
        }
        let _ = self.add_bond(c_term.carbon, id_map[n_term.nitrogen]);

        Ok(())
    }
}
