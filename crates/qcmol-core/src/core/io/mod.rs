//! Parsing of the textual coordinate convention.
//!
//! A coordinate string is a block of lines, each `<label> <x> <y> <z>`, optionally
//! preceded by a `units <angstrom|bohr>` directive. It is both the input format of
//! qcmol and the canonical `Display` form of a molecule.

pub mod coord_string;
