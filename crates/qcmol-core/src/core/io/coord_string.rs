use nalgebra::Point3;
use phf::{Set, phf_set};
use thiserror::Error;
use tracing::trace;

/// First tokens of lines that carry engine directives rather than atoms.
static STRUCTURAL_KEYWORDS: Set<&'static str> = phf_set! {
    "--", "no_com", "nocom", "no_reorient", "noreorient", "symmetry",
};

#[derive(Debug, Error, Clone, PartialEq)]
#[error("Malformed coordinate string on line {line}: {kind}")]
pub struct FormatError {
    pub line: usize,
    pub kind: FormatErrorKind,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormatErrorKind {
    #[error("expected '<label> <x> <y> <z>', found {found} token(s)")]
    UnexpectedTokenCount { found: usize },
    #[error("invalid coordinate value '{value}'")]
    InvalidFloat { value: String },
    #[error("units directive is missing a value")]
    MissingUnitsValue,
}

#[derive(Debug, Clone, PartialEq)]
enum Line<'a> {
    Structural,
    Units(Option<&'a str>),
    Atom(Vec<&'a str>),
}

/// A transient parsing view over coordinate text.
///
/// Nothing is parsed up front; each `extract_*` method walks the text independently.
/// Blank lines, `#` comments, fragment separators (`--`), the `no_com`/`no_reorient`/
/// `symmetry` keywords and a two-integer charge/multiplicity line are skipped, so the
/// geometry exported by an engine can be read back directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateString<'a> {
    text: &'a str,
}

impl<'a> CoordinateString<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Returns the value of the first `units` directive, lower-cased.
    ///
    /// Accepted spellings are `units <value>`, `unit <value>`, `units = <value>` and
    /// `units=<value>`, with a case-insensitive keyword. The value itself is not validated
    /// here.
    ///
    /// # Return
    ///
    /// Returns `Ok(None)` when the text has no directive.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatErrorKind::MissingUnitsValue`] error if the first directive has no
    /// value.
    pub fn extract_units(&self) -> Result<Option<String>, FormatError> {
        for (line, kind) in self.lines() {
            if let Line::Units(value) = kind {
                return value
                    .map(|v| Some(v.to_ascii_lowercase()))
                    .ok_or(FormatError {
                        line,
                        kind: FormatErrorKind::MissingUnitsValue,
                    });
            }
        }
        Ok(None)
    }

    /// Returns the label (first token) of every atom line, in line order.
    pub fn extract_labels(&self) -> Result<Vec<String>, FormatError> {
        self.atom_records()
            .map(|record| record.map(|(label, _)| label.to_string()))
            .collect()
    }

    /// Returns the `x y z` triple of every atom line, in line order.
    pub fn extract_coordinates(&self) -> Result<Vec<Point3<f64>>, FormatError> {
        let coordinates = self
            .atom_records()
            .map(|record| record.map(|(_, position)| position))
            .collect::<Result<Vec<_>, _>>()?;
        trace!("Extracted {} coordinate row(s)", coordinates.len());
        Ok(coordinates)
    }

    fn lines(self) -> impl Iterator<Item = (usize, Line<'a>)> + 'a {
        self.text
            .lines()
            .enumerate()
            .map(|(idx, raw)| (idx + 1, classify(raw)))
    }

    fn atom_records(
        self,
    ) -> impl Iterator<Item = Result<(&'a str, Point3<f64>), FormatError>> + 'a {
        self.lines().filter_map(|(line, kind)| match kind {
            Line::Atom(tokens) => Some(parse_atom(line, &tokens)),
            _ => None,
        })
    }
}

fn classify(raw: &str) -> Line<'_> {
    let content = raw.split('#').next().unwrap_or("");
    let tokens: Vec<&str> = content.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return Line::Structural;
    };

    if let Some(value) = units_directive(&tokens) {
        return Line::Units(value);
    }
    if STRUCTURAL_KEYWORDS.contains(first.to_ascii_lowercase().as_str()) {
        return Line::Structural;
    }
    if tokens.len() == 2 && tokens.iter().all(|t| t.parse::<i64>().is_ok()) {
        // charge and multiplicity
        return Line::Structural;
    }
    Line::Atom(tokens)
}

/// Recognizes a units directive. The outer `Option` tells whether the line is a directive,
/// the inner one whether it carries a value.
fn units_directive<'a>(tokens: &[&'a str]) -> Option<Option<&'a str>> {
    let first = tokens[0];
    let (keyword, inline_value) = match first.split_once('=') {
        Some((keyword, value)) => (keyword, Some(value).filter(|v| !v.is_empty())),
        None => (first, None),
    };
    if !keyword.eq_ignore_ascii_case("units") && !keyword.eq_ignore_ascii_case("unit") {
        return None;
    }
    if inline_value.is_some() {
        return Some(inline_value);
    }

    let mut rest = tokens[1..].iter().copied();
    let value = match rest.next() {
        Some("=") => rest.next(),
        Some(token) => Some(token.strip_prefix('=').unwrap_or(token)),
        None => None,
    };
    Some(value.filter(|v| !v.is_empty()))
}

fn parse_atom<'a>(
    line: usize,
    tokens: &[&'a str],
) -> Result<(&'a str, Point3<f64>), FormatError> {
    let [label, x, y, z] = tokens else {
        return Err(FormatError {
            line,
            kind: FormatErrorKind::UnexpectedTokenCount {
                found: tokens.len(),
            },
        });
    };
    let parse = |value: &str| -> Result<f64, FormatError> {
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| FormatError {
                line,
                kind: FormatErrorKind::InvalidFloat {
                    value: value.to_string(),
                },
            })
    };
    Ok((*label, Point3::new(parse(*x)?, parse(*y)?, parse(*z)?)))
}
