/// Length of one bohr (atomic unit of length) in angstrom, CODATA 2014.
pub const BOHR_TO_ANGSTROM: f64 = 0.52917721067;
