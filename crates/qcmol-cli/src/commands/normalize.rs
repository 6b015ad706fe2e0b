use crate::cli::NormalizeArgs;
use crate::commands::{read_input, write_output};
use crate::config::Settings;
use crate::error::{CliError, Result};
use qcmol::core::models::molecule::Molecule;
use qcmol::engine::native::EngineSession;
use qcmol::engine::reference::ReferenceEngine;
use qcmol::workflows::normalize;
use tracing::info;

pub fn run(args: NormalizeArgs, settings: &Settings) -> Result<()> {
    let text = read_input(&args.input)?;
    let molecule = Molecule::parse_with(&text, settings.default_units, &settings.mass_table)
        .map_err(|e| CliError::FileParsing {
            path: args.input.clone(),
            source: e.into(),
        })?;

    let session = EngineSession::new(ReferenceEngine::with_mass_table(
        settings.mass_table.clone(),
    ));
    let molecule = normalize::run_molecule(&molecule, &session, &settings.mass_table)?;
    info!("Engine returned {} atom(s).", molecule.len());

    write_output(args.output.as_deref(), &molecule.to_string())
}
