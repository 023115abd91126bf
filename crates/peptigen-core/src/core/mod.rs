pub mod io;
pub mod models;
pub mod residues;
pub mod utils;
