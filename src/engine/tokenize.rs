//! Tokenization (stage b).
//!
//! Delimiters are literal text. They are escaped and joined into one regex
//! alternation, longest first, so at every split point the longest matching
//! delimiter wins:
//!
//! ```text
//! delimiters ["*", "**"]  ->  regex  \*\*|\*
//! "1**2*3"                ->  ["1", "2", "3"]
//! ```
//!
//! Empty tokens from adjacent or leading delimiters are kept and the parsing
//! stage rejects them. Trailing empty tokens are dropped, so `"1,2,"` splits
//! into `["1", "2"]` and `","` into no tokens at all.

use crate::error::{CalcError, Result};
use crate::{DEFAULT_DELIMITERS, Extraction};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use tracing::{Level, debug, trace};

/// Token that stands in for an empty payload, which sums to zero.
pub(crate) const EMPTY_PAYLOAD_TOKEN: &str = "0";

static DEFAULT_SPLITTER: Lazy<Regex> = Lazy::new(|| build_splitter(&DEFAULT_DELIMITERS).unwrap());

/// Compile the alternation regex for `delimiters`.
///
/// Sorting is stable, so delimiters of equal length keep source order.
fn build_splitter(delimiters: &[&str]) -> std::result::Result<Regex, regex::Error> {
    let mut ordered: Vec<&str> = delimiters.to_vec();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));
    let alternation = ordered.iter().map(|d| regex::escape(d)).collect::<Vec<_>>().join("|");
    Regex::new(&alternation)
}

/// Splitter for an extraction; the default set reuses a shared compiled regex.
fn splitter_for(extraction: &Extraction<'_>) -> Result<Cow<'static, Regex>> {
    if !extraction.custom {
        return Ok(Cow::Borrowed(&*DEFAULT_SPLITTER));
    }

    build_splitter(&extraction.delimiters).map(Cow::Owned).map_err(|err| {
        // Only reachable when the header is large enough to hit the regex size limit.
        debug!(%err, "custom delimiters could not be compiled");
        CalcError::DelimiterDefinition
    })
}

/// Split the payload of `extraction` into tokens.
pub(crate) fn tokenize<'a>(extraction: &Extraction<'a>) -> Result<Vec<&'a str>> {
    if extraction.payload.is_empty() {
        debug!("empty payload");
        return Ok(vec![EMPTY_PAYLOAD_TOKEN]);
    }

    let splitter = splitter_for(extraction)?;
    let mut tokens: Vec<&'a str> = splitter.split(extraction.payload).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }

    debug!(count = tokens.len(), "payload tokenized");
    if tracing::enabled!(Level::TRACE) {
        for (idx, token) in tokens.iter().enumerate() {
            trace!(idx, token, "token");
        }
    }

    Ok(tokens)
}
