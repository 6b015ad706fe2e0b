//! Static data collaborators: physical constants and the atomic-mass table.

pub mod constants;
pub mod elements;
pub mod masses;
