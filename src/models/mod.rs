pub mod common;
pub mod ligand;
pub mod protein;
pub mod residue;
