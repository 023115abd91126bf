use std::fmt;
use std::str::FromStr;

/// Chemical elements occurring in amino-acid geometry files.
///
/// The set is deliberately restricted to the elements found in the twenty
/// standard amino acids, so every variant carries a covalent bonding radius
/// and distance-based bond detection never has to deal with a partial table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Hydrogen,
    Carbon,
    Nitrogen,
    Oxygen,
    Sulfur,
}

impl Element {
    /// Returns the average covalent bonding radius in Angstroms.
    ///
    /// Values follow Raji Heyrovska, "Atomic Structures of all the Twenty
    /// Essential Amino Acids and a Tripeptide, with Bond Lengths as Sums of
    /// Atomic Covalent Radii".
    pub fn bond_radius(&self) -> f64 {
        match self {
            Element::Hydrogen => 0.37,
            Element::Carbon => 0.70,
            Element::Oxygen => 0.63,
            Element::Nitrogen => 0.66,
            Element::Sulfur => 1.04,
        }
    }

    /// Returns the expected bond length between two elements as the sum of
    /// their covalent radii.
    pub fn avg_bond_distance(a: Element, b: Element) -> f64 {
        a.bond_radius() + b.bond_radius()
    }

    /// Returns the one-letter chemical symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Hydrogen => "H",
            Element::Carbon => "C",
            Element::Nitrogen => "N",
            Element::Oxygen => "O",
            Element::Sulfur => "S",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(Element::Hydrogen),
            "C" => Ok(Element::Carbon),
            "N" => Ok(Element::Nitrogen),
            "O" => Ok(Element::Oxygen),
            "S" => Ok(Element::Sulfur),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip_through_from_str() {
        for element in [
            Element::Hydrogen,
            Element::Carbon,
            Element::Nitrogen,
            Element::Oxygen,
            Element::Sulfur,
        ] {
            assert_eq!(Element::from_str(element.symbol()), Ok(element));
            assert_eq!(format!("{}", element), element.symbol());
        }
    }

    #[test]
    fn from_str_rejects_unknown_symbols() {
        assert_eq!(Element::from_str("Fe"), Err(()));
        assert_eq!(Element::from_str("h"), Err(()));
        assert_eq!(Element::from_str(""), Err(()));
    }

    #[test]
    fn avg_bond_distance_is_sum_of_radii() {
        assert_eq!(
            Element::avg_bond_distance(Element::Hydrogen, Element::Hydrogen),
            2.0 * 0.37
        );
        assert_eq!(
            Element::avg_bond_distance(Element::Carbon, Element::Nitrogen),
            0.70 + 0.66
        );
    }
}
