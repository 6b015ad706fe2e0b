use super::error::EngineError;
use super::native::NativeEngine;
use crate::core::models::molecule::Molecule;
use crate::core::models::units::Units;
use crate::core::utils::masses::MassTable;
use std::fmt::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::trace;

/// The native molecule object of [`ReferenceEngine`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceMolecule {
    pub molecule: Molecule,
    /// Set by a `no_com` directive in the input; disables recentering.
    pub fix_com: bool,
}

/// A self-contained [`NativeEngine`] that behaves like a typical quantum-chemistry engine
/// front end: it reads the coordinate convention, moves the geometry to its center of mass
/// when asked to update it, and exports a coordinate string carrying the usual
/// charge/multiplicity and frame directives.
#[derive(Debug, Default)]
pub struct ReferenceEngine {
    initialize_calls: AtomicUsize,
    mass_table: MassTable,
}

impl ReferenceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine that weighs atoms with `mass_table` when recentering.
    pub fn with_mass_table(mass_table: MassTable) -> Self {
        Self {
            mass_table,
            ..Self::default()
        }
    }

    /// How many times [`NativeEngine::initialize`] has been invoked on this engine.
    pub fn initialize_calls(&self) -> usize {
        self.initialize_calls.load(Ordering::SeqCst)
    }
}

impl NativeEngine for ReferenceEngine {
    type Handle = ReferenceMolecule;

    fn initialize(&self) -> Result<(), EngineError> {
        self.initialize_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn create_molecule_from_string(&self, text: &str) -> Result<ReferenceMolecule, EngineError> {
        let molecule = Molecule::parse_with(text, Units::default(), &self.mass_table)?;
        let fix_com = text.lines().any(|line| {
            matches!(
                line.trim().to_ascii_lowercase().as_str(),
                "no_com" | "nocom"
            )
        });
        trace!(
            "Created reference molecule with {} atom(s) (fix_com: {})",
            molecule.len(),
            fix_com
        );
        Ok(ReferenceMolecule { molecule, fix_com })
    }

    fn update_geometry(&self, handle: &mut ReferenceMolecule) -> Result<(), EngineError> {
        if handle.fix_com {
            return Ok(());
        }
        let Some(com) = handle.molecule.center_of_mass() else {
            return Ok(());
        };
        for position in handle.molecule.coordinates_mut() {
            position.coords -= com.coords;
        }
        handle.fix_com = true;
        Ok(())
    }

    fn export_string(&self, handle: &ReferenceMolecule) -> Result<String, EngineError> {
        let units = match handle.molecule.units() {
            Units::Angstrom => "Angstrom",
            Units::Bohr => "Bohr",
        };
        let mut out = String::new();
        let write_err = |e: std::fmt::Error| EngineError::Backend {
            operation: "export_string",
            message: e.to_string(),
        };
        writeln!(out, "    units {units}").map_err(write_err)?;
        writeln!(out, "    0 1").map_err(write_err)?;
        for (label, position) in &handle.molecule {
            writeln!(
                out,
                "    {:<3} {:>20.12} {:>20.12} {:>20.12}",
                label, position.x, position.y, position.z
            )
            .map_err(write_err)?;
        }
        if handle.fix_com {
            writeln!(out, "    no_com").map_err(write_err)?;
            writeln!(out, "    no_reorient").map_err(write_err)?;
        }
        Ok(out)
    }
}
