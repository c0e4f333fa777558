//! Value generator
//!
//! Produces the flat, row-major value sequence that fills a lattice.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::error::{LatticeError, LatticeResult};

/// Number of values needed for a lattice of `depth` rows: `d(d+1)/2`.
///
/// Returns `None` on overflow.
///
/// # Examples
///
/// ```
/// use pascal_lattice::lattice::value_count;
///
/// assert_eq!(value_count(1), Some(1));
/// assert_eq!(value_count(4), Some(10));
/// ```
#[inline]
pub fn value_count(depth: usize) -> Option<usize> {
    depth.checked_mul(depth.checked_add(1)?).map(|n| n / 2)
}

pub(crate) fn check_bounds(
    depth: usize,
    max_value: i64,
) -> LatticeResult<usize> {
    if depth == 0 {
        return Err(LatticeError::invalid("depth must be at least 1"));
    }
    if max_value <= 0 {
        return Err(LatticeError::invalid(format!(
            "max value must be positive, got {}",
            max_value
        )));
    }
    value_count(depth)
        .ok_or_else(|| LatticeError::invalid(format!("depth {} is too large", depth)))
}

/// Sample `d(d+1)/2` values uniformly from `[1, max_value]` using `rng`.
pub fn generate_values_with<R: Rng + ?Sized>(
    rng: &mut R,
    depth: usize,
    max_value: i64,
) -> LatticeResult<Vec<i64>> {
    let count = check_bounds(depth, max_value)?;
    let values: Vec<i64> = (0..count).map(|_| rng.random_range(1..=max_value)).collect();
    debug!("generated {} values in [1, {}]", values.len(), max_value);
    Ok(values)
}

/// Sample the values for a lattice of `depth` rows.
///
/// With a `seed` the sequence is reproducible; otherwise the thread RNG is
/// used.
///
/// # Examples
///
/// ```
/// use pascal_lattice::lattice::generate_values;
///
/// let a = generate_values(3, 9, Some(7)).unwrap();
/// let b = generate_values(3, 9, Some(7)).unwrap();
/// assert_eq!(a.len(), 6);
/// assert_eq!(a, b);
/// ```
pub fn generate_values(
    depth: usize,
    max_value: i64,
    seed: Option<u64>,
) -> LatticeResult<Vec<i64>> {
    match seed {
        Some(seed) => generate_values_with(&mut StdRng::seed_from_u64(seed), depth, max_value),
        None => generate_values_with(&mut rand::rng(), depth, max_value),
    }
}
