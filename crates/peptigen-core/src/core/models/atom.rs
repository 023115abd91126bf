use super::element::Element;
use nalgebra::Point3;

/// A single atom: an element and a position in Angstroms.
///
/// Bonding is not stored on the atom itself; the owning [`Molecule`]
/// maintains the bond list and adjacency cache so that atoms stay cheap to
/// clone and move between molecules during chain assembly.
///
/// [`Molecule`]: super::molecule::Molecule
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: Element,
    pub position: Point3<f64>,
}

impl Atom {
    pub fn new(element: Element, position: Point3<f64>) -> Self {
        Self { element, position }
    }

    /// Euclidean distance to another atom in Angstroms.
    pub fn distance_to(&self, other: &Atom) -> f64 {
        (self.position - other.position).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_stores_element_and_position() {
        let atom = Atom::new(Element::Carbon, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.element, Element::Carbon);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn distance_to_is_euclidean() {
        let a = Atom::new(Element::Carbon, Point3::new(0.0, 0.0, 0.0));
        let b = Atom::new(Element::Oxygen, Point3::new(3.0, 4.0, 0.0));
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }
}
