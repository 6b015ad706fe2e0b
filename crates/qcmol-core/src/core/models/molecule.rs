use super::units::{InvalidUnitsError, Units};
use crate::core::io::coord_string::{CoordinateString, FormatError};
use crate::core::utils::constants::BOHR_TO_ANGSTROM;
use crate::core::utils::masses::MassTable;
use nalgebra::{Point3, Vector3};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoleculeError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    InvalidUnits(#[from] InvalidUnitsError),

    #[error("No atomic mass is known for atom label '{label}'")]
    UnknownSymbol { label: String },

    #[error("Got {labels} label(s) but {coordinates} coordinate row(s)")]
    LengthMismatch { labels: usize, coordinates: usize },
}

/// A chemical system: atom labels, Cartesian coordinates, their length units, and the
/// per-atom masses looked up from the labels.
///
/// The three per-atom sequences always have the same length and share the atom indexing
/// defined by the order of `labels`. Coordinates change only through [`Molecule::set_units`]
/// (a real conversion) or [`Molecule::set_coordinates`] (a wholesale replacement); apart
/// from that a `Molecule` is a snapshot, and `clone` is a deep copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    labels: Vec<String>,
    coordinates: Vec<Point3<f64>>,
    units: Units,
    masses: Vec<f64>,
}

impl Molecule {
    /// Creates a molecule, looking masses up in the built-in table.
    ///
    /// # Arguments
    ///
    /// * `labels` - Atom labels, one per coordinate row.
    /// * `coordinates` - Cartesian coordinates in `units`.
    /// * `units` - `"angstrom"` or `"bohr"`, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`MoleculeError::InvalidUnits`] for any other units,
    /// [`MoleculeError::LengthMismatch`] if the counts differ, and
    /// [`MoleculeError::UnknownSymbol`] for a label without a tabulated mass.
    pub fn new<I, S>(
        labels: I,
        coordinates: Vec<Point3<f64>>,
        units: &str,
    ) -> Result<Self, MoleculeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_mass_table(labels, coordinates, units, &MassTable::standard())
    }

    /// Same as [`Molecule::new`], with masses looked up in `mass_table`.
    pub fn with_mass_table<I, S>(
        labels: I,
        coordinates: Vec<Point3<f64>>,
        units: &str,
        mass_table: &MassTable,
    ) -> Result<Self, MoleculeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let units: Units = units.parse()?;
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != coordinates.len() {
            return Err(MoleculeError::LengthMismatch {
                labels: labels.len(),
                coordinates: coordinates.len(),
            });
        }
        let masses = labels
            .iter()
            .map(|label| {
                mass_table
                    .mass_of(label)
                    .ok_or_else(|| MoleculeError::UnknownSymbol {
                        label: label.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            labels,
            coordinates,
            units,
            masses,
        })
    }

    /// Parses a coordinate string. Text without a `units` directive is read as angstrom.
    pub fn from_string(text: &str) -> Result<Self, MoleculeError> {
        Self::from_string_with_default(text, Units::default())
    }

    /// Parses a coordinate string, reading text without a `units` directive as `default_units`.
    pub fn from_string_with_default(
        text: &str,
        default_units: Units,
    ) -> Result<Self, MoleculeError> {
        Self::parse_with(text, default_units, &MassTable::standard())
    }

    /// Parses a coordinate string with an explicit default unit and mass table.
    pub fn parse_with(
        text: &str,
        default_units: Units,
        mass_table: &MassTable,
    ) -> Result<Self, MoleculeError> {
        let coord_string = CoordinateString::new(text);
        let units = coord_string.extract_units()?;
        let units = units.as_deref().unwrap_or(default_units.as_str());
        let labels = coord_string.extract_labels()?;
        let coordinates = coord_string.extract_coordinates()?;
        debug!("Parsed {} atom(s) in {}", labels.len(), units);
        Self::with_mass_table(labels, coordinates, units, mass_table)
    }

    /// Builds a molecule from an already wrapped coordinate string, in the given units.
    pub fn from_coord_string(
        coord_string: &CoordinateString<'_>,
        units: &str,
    ) -> Result<Self, MoleculeError> {
        let labels = coord_string.extract_labels()?;
        let coordinates = coord_string.extract_coordinates()?;
        Self::new(labels, coordinates, units)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn coordinates(&self) -> &[Point3<f64>] {
        &self.coordinates
    }

    /// Mutable access to the coordinate rows. The atom count cannot change through it.
    pub fn coordinates_mut(&mut self) -> &mut [Point3<f64>] {
        &mut self.coordinates
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Converts the coordinates to `target` units. Does nothing if already in `target`.
    pub fn set_units(&mut self, target: Units) {
        match (self.units, target) {
            (Units::Bohr, Units::Angstrom) => {
                for position in &mut self.coordinates {
                    position.coords *= BOHR_TO_ANGSTROM;
                }
            }
            (Units::Angstrom, Units::Bohr) => {
                for position in &mut self.coordinates {
                    position.coords /= BOHR_TO_ANGSTROM;
                }
            }
            _ => return,
        }
        debug!("Converted {} atom(s) from {} to {}", self.len(), self.units, target);
        self.units = target;
    }

    /// Replaces the coordinates wholesale.
    ///
    /// With `units` set, the units label is overwritten *without* converting anything: the
    /// caller asserts that `coordinates` are already in those units.
    ///
    /// # Errors
    ///
    /// Returns [`MoleculeError::LengthMismatch`] if the number of rows differs from the atom
    /// count; the molecule is left unchanged in that case.
    pub fn set_coordinates(
        &mut self,
        coordinates: Vec<Point3<f64>>,
        units: Option<Units>,
    ) -> Result<(), MoleculeError> {
        if coordinates.len() != self.len() {
            return Err(MoleculeError::LengthMismatch {
                labels: self.len(),
                coordinates: coordinates.len(),
            });
        }
        self.coordinates = coordinates;
        if let Some(units) = units {
            self.units = units;
        }
        Ok(())
    }

    /// A deep copy of this molecule.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Iterates `(label, position)` pairs in atom order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Point3<f64>)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.coordinates.iter())
    }

    pub fn total_mass(&self) -> f64 {
        self.masses.iter().sum()
    }

    /// The mass-weighted mean position, in the molecule's units.
    ///
    /// # Return
    ///
    /// Returns `None` for an empty molecule or one whose masses sum to zero.
    pub fn center_of_mass(&self) -> Option<Point3<f64>> {
        let total = self.total_mass();
        if self.is_empty() || total <= 0.0 {
            return None;
        }
        let weighted = self
            .coordinates
            .iter()
            .zip(&self.masses)
            .fold(Vector3::zeros(), |acc, (position, &mass)| {
                acc + position.coords * mass
            });
        Some(Point3::from(weighted / total))
    }
}

impl<'a> IntoIterator for &'a Molecule {
    type Item = (&'a str, &'a Point3<f64>);
    type IntoIter = std::iter::Zip<
        std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>,
        std::slice::Iter<'a, Point3<f64>>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        let as_str: fn(&'a String) -> &'a str = String::as_str;
        self.labels.iter().map(as_str).zip(self.coordinates.iter())
    }
}

impl fmt::Display for Molecule {
    /// Writes the coordinate string: a `units` line, then one
    /// `<label> <x> <y> <z>` line per atom with 10 decimals in 15-wide columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "units {}", self.units)?;
        for (label, position) in self {
            writeln!(
                f,
                "{:<2} {:>15.10} {:>15.10} {:>15.10}",
                label, position.x, position.y, position.z
            )?;
        }
        Ok(())
    }
}

impl FromStr for Molecule {
    type Err = MoleculeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}
