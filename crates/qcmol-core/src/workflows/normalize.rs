use crate::core::models::molecule::Molecule;
use crate::core::models::units::Units;
use crate::core::utils::masses::MassTable;
use crate::engine::error::EngineError;
use crate::engine::native::{EngineSession, NativeEngine};
use tracing::{info, instrument};

/// Sends the geometry in `text` through `session`'s engine and returns the geometry the
/// engine settled on after updating it.
pub fn run<E: NativeEngine>(
    text: &str,
    session: &EngineSession<E>,
    default_units: Units,
    mass_table: &MassTable,
) -> Result<Molecule, EngineError> {
    let molecule = Molecule::parse_with(text, default_units, mass_table)?;
    run_molecule(&molecule, session, mass_table)
}

/// Same as [`run`] for an already parsed molecule. `mass_table` is used to rebuild the
/// molecule from the engine's export.
#[instrument(skip_all, name = "normalize_workflow")]
pub fn run_molecule<E: NativeEngine>(
    molecule: &Molecule,
    session: &EngineSession<E>,
    mass_table: &MassTable,
) -> Result<Molecule, EngineError> {
    info!("Handing {} atom(s) to the engine.", molecule.len());
    let mut handle = molecule.make_native_handle(session)?;
    Molecule::from_native_handle_with(session, &mut handle, mass_table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reference::ReferenceEngine;

    #[test]
    fn run_recenters_through_reference_engine() {
        let session = EngineSession::new(ReferenceEngine::new());
        let molecule =
            run("He 1.0 2.0 3.0\n", &session, Units::Bohr, &MassTable::standard()).unwrap();
        assert_eq!(molecule.units(), Units::Bohr);
        assert!(molecule.coordinates()[0].coords.norm() < 1e-12);
        assert_eq!(session.engine().initialize_calls(), 1);
    }

    #[test]
    fn run_reports_parse_failures_as_molecule_errors() {
        let session = EngineSession::new(ReferenceEngine::new());
        let result = run("He 1.0 2.0\n", &session, Units::Angstrom, &MassTable::standard());
        assert!(matches!(result, Err(EngineError::Molecule { .. })));
        assert!(!session.is_initialized());
    }

    #[test]
    fn run_keeps_overridden_masses() {
        let mut masses = MassTable::standard();
        masses.insert("Xx", 10.0);
        let session = EngineSession::new(ReferenceEngine::with_mass_table(masses.clone()));

        let molecule = run("Xx 0 0 0\nH 0 0 1\n", &session, Units::Angstrom, &masses).unwrap();

        assert_eq!(molecule.labels(), ["Xx", "H"]);
        assert_eq!(molecule.masses()[0], 10.0);
        assert!(molecule.center_of_mass().unwrap().coords.norm() < 1e-10);
    }
}
