//! # Core Module
//!
//! The data layer of qcmol: the molecule value object, the coordinate-string parser,
//! and the static atomic data both of them rely on.
//!
//! ## Key Components
//!
//! - **Molecular Representation** ([`models`]) - The `Molecule` value object and length units
//! - **Text I/O** ([`io`]) - Parsing of the `<label> <x> <y> <z>` coordinate convention
//! - **Static Data** ([`utils`]) - Atomic masses and physical constants
//!
//! ## Usage
//!
//! ```ignore
//! use qcmol::core::models::{molecule::Molecule, units::Units};
//!
//! let mut water = Molecule::from_string("units angstrom\nO 0.0 0.0 -0.0647\nH 0.0 -0.749 0.5135\nH 0.0 0.749 0.5135")?;
//! water.set_units(Units::Bohr);
//! println!("{}", water);
//! ```

pub mod io;
pub mod models;
pub mod utils;
