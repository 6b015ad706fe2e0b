use super::elements::{element_symbol, standard_mass};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
struct MassRecord {
    symbol: String,
    mass: f64,
}

/// Atomic-mass lookup used when a molecule is constructed.
///
/// The table starts from the built-in isotope masses of [`super::elements`] and can be
/// extended with overrides, e.g. to give a labelled atom (`H1`) an isotopic mass or to
/// support a pseudo-atom the built-in table lacks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MassTable {
    overrides: HashMap<String, f64>,
}

#[derive(Debug, Error)]
pub enum MassTableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Invalid mass {mass} for '{symbol}' in '{path}': masses must be finite and non-negative")]
    InvalidMass {
        path: String,
        symbol: String,
        mass: f64,
    },
}

impl MassTable {
    /// The built-in table without overrides.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Loads overrides from a CSV file with a `symbol,mass` header.
    ///
    /// # Errors
    ///
    /// Returns [`MassTableError::Io`] if the file cannot be opened, [`MassTableError::Csv`]
    /// if it cannot be read or a record cannot be deserialized, and
    /// [`MassTableError::InvalidMass`] for negative or non-finite masses.
    pub fn load_overrides(path: &Path) -> Result<Self, MassTableError> {
        let path_str = path.to_string_lossy().to_string();
        let file = File::open(path).map_err(|e| MassTableError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut table = Self::standard();
        for result in reader.deserialize::<MassRecord>() {
            let record = result.map_err(|e| MassTableError::Csv {
                path: path_str.clone(),
                source: e,
            })?;
            if !record.mass.is_finite() || record.mass < 0.0 {
                return Err(MassTableError::InvalidMass {
                    path: path_str,
                    symbol: record.symbol,
                    mass: record.mass,
                });
            }
            table.insert(record.symbol, record.mass);
        }
        debug!(
            "Loaded {} mass override(s) from {}",
            table.overrides.len(),
            path_str
        );
        Ok(table)
    }

    pub fn insert(&mut self, label: impl Into<String>, mass: f64) {
        self.overrides.insert(label.into(), mass);
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Looks up the mass for an atom label.
    ///
    /// The exact label is tried among the overrides first, then its element symbol among
    /// the overrides, then the element symbol in the built-in table.
    pub fn mass_of(&self, label: &str) -> Option<f64> {
        let label = label.trim();
        if let Some(&mass) = self.overrides.get(label) {
            return Some(mass);
        }
        let symbol = element_symbol(label)?;
        self.overrides
            .get(&symbol)
            .copied()
            .or_else(|| standard_mass(&symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn standard_table_resolves_decorated_labels() {
        let table = MassTable::standard();
        assert_eq!(table.mass_of("O"), Some(15.99491461957));
        assert_eq!(table.mass_of("H1"), Some(1.00782503223));
        assert_eq!(table.mass_of(" o_a "), Some(15.99491461957));
        assert_eq!(table.mass_of("Gh(He)"), Some(4.00260325413));
    }

    #[test]
    fn standard_table_returns_none_for_unknown_symbols() {
        let table = MassTable::standard();
        assert_eq!(table.mass_of("Xx"), None);
        assert_eq!(table.mass_of("42"), None);
    }

    #[test]
    fn exact_label_override_takes_precedence_over_symbol() {
        let mut table = MassTable::standard();
        table.insert("H1", 2.014);
        table.insert("H", 1.5);
        assert_eq!(table.mass_of("H1"), Some(2.014));
        assert_eq!(table.mass_of("H2"), Some(1.5));
        assert_eq!(table.mass_of("O"), Some(15.99491461957));
    }

    #[test]
    fn overrides_can_introduce_new_symbols() {
        let mut table = MassTable::standard();
        assert_eq!(table.mass_of("Xx"), None);
        table.insert("Xx", 99.0);
        assert_eq!(table.mass_of("Xx"), Some(99.0));
        assert_eq!(table.override_count(), 1);
    }

    #[test]
    fn load_overrides_succeeds_with_valid_csv() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("masses.csv");
        fs::write(&file_path, "symbol,mass\nH1, 2.01410177812\nXx,50.0\n").unwrap();

        let table = MassTable::load_overrides(&file_path).unwrap();
        assert_eq!(table.override_count(), 2);
        assert_eq!(table.mass_of("H1"), Some(2.01410177812));
        assert_eq!(table.mass_of("Xx"), Some(50.0));
        assert_eq!(table.mass_of("H"), Some(1.00782503223));
    }

    #[test]
    fn load_overrides_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing.csv");
        let result = MassTable::load_overrides(&file_path);
        assert!(matches!(
            result,
            Err(MassTableError::Io { ref source, .. }) if source.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn load_overrides_reports_the_real_error_for_a_directory() {
        let dir = tempdir().unwrap();
        let err = MassTable::load_overrides(dir.path()).unwrap_err();
        let is_not_found = matches!(
            &err,
            MassTableError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        );
        assert!(!is_not_found, "directory reported as missing: {err}");
    }

    #[test]
    fn load_overrides_fails_for_malformed_csv() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("malformed.csv");
        fs::write(&file_path, "symbol,mass\nH,not-a-number\n").unwrap();
        let result = MassTable::load_overrides(&file_path);
        assert!(matches!(result, Err(MassTableError::Csv { .. })));
    }

    #[test]
    fn load_overrides_rejects_negative_masses() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("negative.csv");
        fs::write(&file_path, "symbol,mass\nH,-1.0\n").unwrap();
        let result = MassTable::load_overrides(&file_path);
        assert!(matches!(
            result,
            Err(MassTableError::InvalidMass { ref symbol, .. }) if symbol == "H"
        ));
    }
}
