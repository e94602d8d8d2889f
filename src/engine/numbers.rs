//! Numeric parsing (stage c).
//!
//! Each token must be a strict decimal `i32`: optional `+`/`-` sign followed
//! by ASCII digits. `str::parse::<i32>` already enforces exactly that (no
//! whitespace, no fraction, no separators, range-checked), so the stage is a
//! thin wrapper that turns the first failure into [`CalcError::NumberFormat`].

use crate::error::{CalcError, Result};
use tracing::{debug, trace};

/// Parse every token left to right, stopping at the first invalid one.
pub(crate) fn parse_tokens(tokens: &[&str]) -> Result<Vec<i32>> {
    let values = tokens
        .iter()
        .map(|token| {
            token.parse::<i32>().map_err(|err| {
                debug!(token, %err, "token is not a number");
                CalcError::NumberFormat { token: token.to_string() }
            })
        })
        .collect::<Result<Vec<i32>>>()?;

    trace!(?values, "tokens parsed");
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_integers() {
        assert_eq!(parse_tokens(&["1", "+2", "-3", "0", "007"]).unwrap(), vec![1, 2, -3, 0, 7]);
    }

    #[test]
    fn accepts_i32_bounds() {
        assert_eq!(parse_tokens(&["2147483647", "-2147483648"]).unwrap(), vec![i32::MAX, i32::MIN]);
    }

    #[test]
    fn rejects_non_strict_forms() {
        let bad = ["", "4l", " 1", "1 ", "1.0", "1e3", "1_000", "+", "-", "--1", "2147483648", "8:333", "١"];
        for token in bad {
            assert_eq!(
                parse_tokens(&["1", token]),
                Err(CalcError::NumberFormat { token: token.to_string() }),
                "token: {token:?}"
            );
        }
    }

    #[test]
    fn first_invalid_token_wins() {
        assert_eq!(parse_tokens(&["1", "x", "y"]), Err(CalcError::NumberFormat { token: "x".to_string() }));
    }
}
