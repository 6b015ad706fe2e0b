use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length unit of a set of Cartesian coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Units {
    #[default]
    Angstrom,
    Bohr,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Units must be 'angstrom' or 'bohr', got '{0}'")]
pub struct InvalidUnitsError(pub String);

impl Units {
    /// The lowercase name used in coordinate strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Angstrom => "angstrom",
            Units::Bohr => "bohr",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = InvalidUnitsError;

    /// Parses a unit name case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "angstrom" => Ok(Units::Angstrom),
            "bohr" => Ok(Units::Bohr),
            _ => Err(InvalidUnitsError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_units_are_angstrom() {
        assert_eq!(Units::default(), Units::Angstrom);
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("angstrom".parse::<Units>(), Ok(Units::Angstrom));
        assert_eq!("Angstrom".parse::<Units>(), Ok(Units::Angstrom));
        assert_eq!("BOHR".parse::<Units>(), Ok(Units::Bohr));
        assert_eq!(" bohr ".parse::<Units>(), Ok(Units::Bohr));
    }

    #[test]
    fn from_str_rejects_other_units() {
        assert_eq!(
            "meters".parse::<Units>(),
            Err(InvalidUnitsError("meters".to_string()))
        );
        assert!("ang".parse::<Units>().is_err());
        assert!("".parse::<Units>().is_err());
    }

    #[test]
    fn display_is_lowercase_name() {
        assert_eq!(Units::Angstrom.to_string(), "angstrom");
        assert_eq!(Units::Bohr.to_string(), "bohr");
    }
}
