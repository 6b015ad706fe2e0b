use phf::{Map, phf_map};

/// Mass of the most abundant isotope of each element, in daltons.
#[rustfmt::skip]
static ISOTOPE_MASSES: Map<&'static str, f64> = phf_map! {
    // --- Period 1 ---
    "H"  => 1.00782503223, "D" => 2.01410177812, "He" => 4.00260325413,

    // --- Period 2 ---
    "Li" => 7.0160034366,  "Be" => 9.012183065,    "B"  => 11.00930536,
    "C"  => 12.0,          "N"  => 14.00307400443, "O"  => 15.99491461957,
    "F"  => 18.99840316273, "Ne" => 19.9924401762,

    // --- Period 3 ---
    "Na" => 22.989769282,  "Mg" => 23.985041697,   "Al" => 26.98153853,
    "Si" => 27.97692653465, "P" => 30.97376199842, "S"  => 31.9720711744,
    "Cl" => 34.968852682,  "Ar" => 39.9623831237,

    // --- Period 4 ---
    "K"  => 38.9637064864, "Ca" => 39.962590863,   "Sc" => 44.95590828,
    "Ti" => 47.94794198,   "V"  => 50.94395704,    "Cr" => 51.94050623,
    "Mn" => 54.93804391,   "Fe" => 55.93493633,    "Co" => 58.93319429,
    "Ni" => 57.93534241,   "Cu" => 62.92959772,    "Zn" => 63.92914201,
    "Ga" => 68.9255735,    "Ge" => 73.921177761,   "As" => 74.92159457,
    "Se" => 79.9165218,    "Br" => 78.9183376,     "Kr" => 83.9114977282,

    // --- Period 5 ---
    "Rb" => 84.9117897379, "Sr" => 87.9056125,     "Y"  => 88.9058403,
    "Zr" => 89.9046977,    "Nb" => 92.906373,      "Mo" => 97.90540482,
    "Tc" => 97.9072124,    "Ru" => 101.9043441,    "Rh" => 102.905498,
    "Pd" => 105.9034804,   "Ag" => 106.9050916,    "Cd" => 113.90336509,
    "In" => 114.903878776, "Sn" => 119.90220163,   "Sb" => 120.903812,
    "Te" => 129.906222748, "I"  => 126.9044719,    "Xe" => 131.9041550856,
};

/// Returns the tabulated mass for an element symbol, which must already be normalized
/// (`"He"`, not `"HE"` or `"He1"`).
pub fn standard_mass(symbol: &str) -> Option<f64> {
    ISOTOPE_MASSES.get(symbol).copied()
}

/// Reduces an atom label to the element symbol it names.
///
/// Engines decorate labels in a few ways: ghost atoms are written `@He` or `Gh(He)`, and
/// atoms of the same element are told apart with a numeric (`H1`) or underscore (`O_a`)
/// suffix. All of these reduce to the bare symbol with canonical case (`He`, `H`, `O`).
///
/// # Return
///
/// Returns `None` if no alphabetic symbol remains after stripping the decorations.
pub fn element_symbol(label: &str) -> Option<String> {
    let mut label = label.trim();
    if let Some(rest) = label.strip_prefix('@') {
        label = rest;
    } else if label
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("gh("))
        && label.len() > 4
        && label.ends_with(')')
    {
        label = &label[3..label.len() - 1];
    }

    let end = label
        .find(|c: char| c == '_' || c.is_ascii_digit())
        .unwrap_or(label.len());
    let symbol = &label[..end];
    if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut chars = symbol.chars();
    let first = chars.next()?.to_ascii_uppercase();
    Some(std::iter::once(first).chain(chars.map(|c| c.to_ascii_lowercase())).collect())
}
