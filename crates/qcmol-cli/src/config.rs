use crate::error::{CliError, Result};
use qcmol::core::models::units::Units;
use qcmol::core::utils::masses::MassTable;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialMoleculeConfig {
    #[serde(rename = "default-units")]
    default_units: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    units: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialMassesConfig {
    overrides: Option<PathBuf>,
}

/// Configuration as read from the TOML file and `--set` overrides, before validation.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    molecule: Option<PartialMoleculeConfig>,
    output: Option<PartialOutputConfig>,
    masses: Option<PartialMassesConfig>,
}

/// Validated settings shared by all subcommands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub default_units: Units,
    pub output_units: Option<Units>,
    pub mass_table: MassTable,
}

impl PartialSettings {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads the optional configuration file and applies `--set` overrides on top of it.
    pub fn load(path: Option<&Path>, set_values: &[String]) -> Result<Self> {
        let mut partial = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        partial.apply_set_values(set_values)?;
        Ok(partial)
    }

    pub fn resolve(self) -> Result<Settings> {
        let molecule = self.molecule.unwrap_or_default();
        let output = self.output.unwrap_or_default();
        let masses = self.masses.unwrap_or_default();

        let default_units = molecule
            .default_units
            .as_deref()
            .map(|u| parse_units(u, "molecule.default-units"))
            .transpose()?
            .unwrap_or_default();
        let output_units = output
            .units
            .as_deref()
            .map(|u| parse_units(u, "output.units"))
            .transpose()?;

        let mass_table = match masses.overrides {
            Some(path) => {
                info!("Loading mass overrides from {:?}", &path);
                MassTable::load_overrides(&path)?
            }
            None => MassTable::standard(),
        };

        Ok(Settings {
            default_units,
            output_units,
            mass_table,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let value = value.trim().to_string();

            match key.trim() {
                "molecule.default-units" => {
                    self.molecule
                        .get_or_insert_with(Default::default)
                        .default_units = Some(value);
                }
                "output.units" => {
                    self.output.get_or_insert_with(Default::default).units = Some(value);
                }
                "masses.overrides" => {
                    self.masses.get_or_insert_with(Default::default).overrides =
                        Some(PathBuf::from(value));
                }
                other => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        other
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_units(value: &str, key: &str) -> Result<Units> {
    value
        .parse()
        .map_err(|e| CliError::Config(format!("Invalid value for `{}`: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_config_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let file_path = dir.join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    #[test]
    fn defaults_without_file_or_overrides() {
        let settings = PartialSettings::load(None, &[]).unwrap().resolve().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.default_units, Units::Angstrom);
        assert_eq!(settings.output_units, None);
    }

    #[test]
    fn loads_all_sections_from_file() {
        let dir = tempdir().unwrap();
        let masses = write_config_file(dir.path(), "masses.csv", "symbol,mass\nXx,3.0\n");
        let config = write_config_file(
            dir.path(),
            "qcmol.toml",
            &format!(
                r#"
            [molecule]
            default-units = "Bohr"

            [output]
            units = "angstrom"

            [masses]
            overrides = "{}"
            "#,
                masses.display()
            ),
        );

        let settings = PartialSettings::load(Some(&config), &[])
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(settings.default_units, Units::Bohr);
        assert_eq!(settings.output_units, Some(Units::Angstrom));
        assert_eq!(settings.mass_table.mass_of("Xx"), Some(3.0));
    }

    #[test]
    fn set_values_override_file() {
        let dir = tempdir().unwrap();
        let config = write_config_file(dir.path(), "qcmol.toml", "[output]\nunits = \"angstrom\"\n");
        let settings = PartialSettings::load(Some(&config), &["output.units=bohr".to_string()])
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(settings.output_units, Some(Units::Bohr));
    }

    #[test]
    fn unknown_keys_in_file_are_rejected() {
        let dir = tempdir().unwrap();
        let config = write_config_file(dir.path(), "bad.toml", "[output]\nprecision = 4\n");
        let result = PartialSettings::load(Some(&config), &[]);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = PartialSettings::load(Some(&dir.path().join("missing.toml")), &[]);
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn malformed_set_value_is_rejected() {
        let result = PartialSettings::load(None, &["output.units".to_string()]);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn unsupported_set_key_is_rejected() {
        let result = PartialSettings::load(None, &["output.precision=4".to_string()]);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("output.precision")));
    }

    #[test]
    fn invalid_units_value_fails_on_resolve() {
        let partial =
            PartialSettings::load(None, &["molecule.default-units=meters".to_string()]).unwrap();
        let result = partial.resolve();
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("meters")));
    }

    #[test]
    fn missing_mass_override_file_fails_on_resolve() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.csv");
        let partial = PartialSettings::load(
            None,
            &[format!("masses.overrides={}", missing.display())],
        )
        .unwrap();
        assert!(matches!(partial.resolve(), Err(CliError::MassTable(_))));
    }
}
