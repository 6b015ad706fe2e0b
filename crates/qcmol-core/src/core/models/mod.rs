//! # Core Models Module
//!
//! The value objects used throughout qcmol.
//!
//! ## Key Components
//!
//! - [`molecule`] - Labels, Cartesian coordinates, units and masses of a chemical system
//! - [`units`] - The two supported length units and conversion between them
//!
//! ```ignore
//! use qcmol::core::models::molecule::Molecule;
//! use nalgebra::Point3;
//!
//! let h2 = Molecule::new(["H", "H"], vec![Point3::origin(), Point3::new(0.0, 0.0, 0.74)], "angstrom")?;
//! assert_eq!(h2.len(), 2);
//! ```

pub mod molecule;
pub mod units;
