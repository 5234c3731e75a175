//! Divisor finder
//!
//! Pure computation, defined for positive integers only.

use crate::error::{Result, SortCopyError};

/// Compute every positive divisor of `n`, in ascending order.
///
/// Defined only for positive integers; `n == 0` fails with an explicit
/// error instead of scanning an empty range or looping forever.
pub fn divisors(n: u64) -> Result<Vec<u64>> {
    if n == 0 {
        return Err(SortCopyError::InvalidInput(0));
    }
    Ok((1..=n).filter(|d| n % d == 0).collect())
}
