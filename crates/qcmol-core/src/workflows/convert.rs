use crate::core::models::molecule::{Molecule, MoleculeError};
use crate::core::models::units::Units;
use crate::core::utils::masses::MassTable;
use tracing::{info, instrument};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertOptions {
    /// Units assumed when the text has no `units` directive.
    pub default_units: Units,
    /// Units to convert to; `None` keeps the units of the input.
    pub target_units: Option<Units>,
    pub mass_table: MassTable,
}

#[instrument(skip_all, name = "convert_workflow")]
pub fn run(text: &str, options: &ConvertOptions) -> Result<Molecule, MoleculeError> {
    let mut molecule = Molecule::parse_with(text, options.default_units, &options.mass_table)?;
    info!(
        "Read {} atom(s) in {}.",
        molecule.len(),
        molecule.units()
    );
    if let Some(target) = options.target_units {
        molecule.set_units(target);
    }
    Ok(molecule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::constants::BOHR_TO_ANGSTROM;

    #[test]
    fn run_without_target_keeps_input_units() {
        let molecule = run("units bohr\nH 0 0 1.0\n", &ConvertOptions::default()).unwrap();
        assert_eq!(molecule.units(), Units::Bohr);
        assert_eq!(molecule.coordinates()[0].z, 1.0);
    }

    #[test]
    fn run_converts_to_target_units() {
        let options = ConvertOptions {
            target_units: Some(Units::Angstrom),
            ..Default::default()
        };
        let molecule = run("units bohr\nH 0 0 1.0\n", &options).unwrap();
        assert_eq!(molecule.units(), Units::Angstrom);
        assert_eq!(molecule.coordinates()[0].z, BOHR_TO_ANGSTROM);
    }

    #[test]
    fn run_applies_default_units_to_text_without_directive() {
        let options = ConvertOptions {
            default_units: Units::Bohr,
            target_units: Some(Units::Angstrom),
            ..Default::default()
        };
        let molecule = run("H 0 0 2.0\n", &options).unwrap();
        assert_eq!(molecule.units(), Units::Angstrom);
        assert_eq!(molecule.coordinates()[0].z, 2.0 * BOHR_TO_ANGSTROM);
    }

    #[test]
    fn run_uses_mass_table_overrides() {
        let mut mass_table = MassTable::standard();
        mass_table.insert("Xx", 10.0);
        let options = ConvertOptions {
            mass_table,
            ..Default::default()
        };
        let molecule = run("Xx 0 0 0\n", &options).unwrap();
        assert_eq!(molecule.masses(), [10.0]);
    }

    #[test]
    fn run_propagates_unknown_symbol() {
        let result = run("Xx 0 0 0\n", &ConvertOptions::default());
        assert!(matches!(result, Err(MoleculeError::UnknownSymbol { .. })));
    }
}
