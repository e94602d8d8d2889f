//! Reduction (stage e).

use crate::error::{CalcError, Result};
use tracing::debug;

/// Sum `values` left to right, failing before the total would pass `i32::MAX`.
///
/// The candidate total is computed in `i64`, which cannot overflow for any
/// `i32 + i32`.
pub(crate) fn checked_sum(values: &[i32]) -> Result<i32> {
    let mut total: i32 = 0;
    for &value in values {
        let next = i64::from(total) + i64::from(value);
        total = i32::try_from(next).map_err(move |_| {
            debug!(total, value, "sum overflow");
            CalcError::Overflow { max: i32::MAX }
        })?;
    }

    debug!(sum = total, count = values.len(), "values summed");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_left_to_right() {
        assert_eq!(checked_sum(&[]), Ok(0));
        assert_eq!(checked_sum(&[4, 8, 333, 5]), Ok(350));
    }

    #[test]
    fn reaching_max_exactly_is_allowed() {
        assert_eq!(checked_sum(&[i32::MAX - 1000, 1000]), Ok(i32::MAX));
    }

    #[test]
    fn exceeding_max_fails() {
        assert_eq!(checked_sum(&[i32::MAX, 1]), Err(CalcError::Overflow { max: i32::MAX }));
    }
}
