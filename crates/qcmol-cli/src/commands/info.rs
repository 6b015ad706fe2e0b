use crate::cli::InfoArgs;
use crate::commands::{read_input, write_output};
use crate::config::Settings;
use crate::error::{CliError, Result};
use qcmol::core::models::molecule::Molecule;
use std::fmt::Write;

pub fn run(args: InfoArgs, settings: &Settings) -> Result<()> {
    let text = read_input(&args.input)?;
    let molecule = Molecule::parse_with(&text, settings.default_units, &settings.mass_table)
        .map_err(|e| CliError::FileParsing {
            path: args.input.clone(),
            source: e.into(),
        })?;
    write_output(None, &render_report(&molecule)?)
}

fn render_report(molecule: &Molecule) -> Result<String> {
    let mut out = String::new();
    let fmt_err = |e: std::fmt::Error| CliError::Other(e.into());

    writeln!(out, "Atoms: {}", molecule.len()).map_err(fmt_err)?;
    writeln!(out, "Units: {}", molecule.units()).map_err(fmt_err)?;
    writeln!(
        out,
        "{:>5}  {:<6} {:>14} {:>15} {:>15} {:>15}",
        "#", "Label", "Mass (Da)", "x", "y", "z"
    )
    .map_err(fmt_err)?;
    for (idx, ((label, position), mass)) in molecule.iter().zip(molecule.masses()).enumerate() {
        writeln!(
            out,
            "{:>5}  {:<6} {:>14.8} {:>15.10} {:>15.10} {:>15.10}",
            idx + 1,
            label,
            mass,
            position.x,
            position.y,
            position.z
        )
        .map_err(fmt_err)?;
    }
    writeln!(out, "Total mass: {:.8} Da", molecule.total_mass()).map_err(fmt_err)?;
    let com_line = match molecule.center_of_mass() {
        Some(com) => writeln!(
            out,
            "Center of mass ({}): {:.10} {:.10} {:.10}",
            molecule.units(),
            com.x,
            com.y,
            com.z
        ),
        None => writeln!(out, "Center of mass: undefined"),
    };
    com_line.map_err(fmt_err)?;
    Ok(out)
}
