pub mod atom;
pub mod element;
pub mod ids;
pub mod molecule;
