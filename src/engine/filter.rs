//! Threshold filtering and negative validation (stage d).
//!
//! Filtering runs first and only removes values above [`MAX_NUMBER`], so it
//! can never hide a negative value from validation.

use crate::error::{CalcError, Result};
use crate::{Filtered, MAX_NUMBER};
use tracing::debug;

/// Split `values` into those kept (`<= MAX_NUMBER`) and those dropped.
pub(crate) fn filter_above_max(values: Vec<i32>) -> Filtered {
    let (kept, dropped): (Vec<i32>, Vec<i32>) = values.into_iter().partition(|v| *v <= MAX_NUMBER);
    if !dropped.is_empty() {
        debug!(?dropped, max = MAX_NUMBER, "values above threshold ignored");
    }
    Filtered { kept, dropped }
}

/// Fail with every negative value, in order, if there is at least one.
pub(crate) fn reject_negatives(values: &[i32]) -> Result<()> {
    let negatives: Vec<i32> = values.iter().copied().filter(|v| *v < 0).collect();
    if negatives.is_empty() {
        return Ok(());
    }

    debug!(?negatives, "negative values found");
    Err(CalcError::NegativeNumbers { values: negatives })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        let filtered = filter_above_max(vec![2, 1000, 1001, 5000, 3]);
        assert_eq!(filtered.kept, vec![2, 1000, 3]);
        assert_eq!(filtered.dropped, vec![1001, 5000]);
    }

    #[test]
    fn negatives_are_never_filtered() {
        let filtered = filter_above_max(vec![-5000, 1001]);
        assert_eq!(filtered.kept, vec![-5000]);
    }

    #[test]
    fn all_negatives_reported_in_order() {
        assert_eq!(reject_negatives(&[1, 2, -3, 4, -4]), Err(CalcError::NegativeNumbers { values: vec![-3, -4] }));
        assert_eq!(
            reject_negatives(&[-9, -1, -5]),
            Err(CalcError::NegativeNumbers { values: vec![-9, -1, -5] })
        );
    }

    #[test]
    fn zero_is_not_negative() {
        assert_eq!(reject_negatives(&[0, 1, 0]), Ok(()));
        assert_eq!(reject_negatives(&[]), Ok(()));
    }
}
