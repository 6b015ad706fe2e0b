use crate::cli::ConvertArgs;
use crate::commands::{read_input, write_output};
use crate::config::Settings;
use crate::error::{CliError, Result};
use qcmol::core::models::units::Units;
use qcmol::workflows::convert::{self, ConvertOptions};
use tracing::info;

pub fn run(args: ConvertArgs, settings: &Settings) -> Result<()> {
    let target_units = match args.units.as_deref() {
        Some(units) => Some(
            units
                .parse::<Units>()
                .map_err(|e| CliError::Argument(e.to_string()))?,
        ),
        None => settings.output_units,
    };

    let text = read_input(&args.input)?;
    let options = ConvertOptions {
        default_units: settings.default_units,
        target_units,
        mass_table: settings.mass_table.clone(),
    };
    let molecule = convert::run(&text, &options).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;

    info!(
        "Writing {} atom(s) in {}.",
        molecule.len(),
        molecule.units()
    );
    write_output(args.output.as_deref(), &molecule.to_string())
}
