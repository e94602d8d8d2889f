//! Delimiter-aware string calculator.
//!
//! `strcalc` sums the integers encoded in a string. Numbers are separated by
//! `,` or `\n` by default, or by custom delimiters declared in a header line:
//!
//! ```text
//! //[*][%%]\n1*2%%3
//! ^^^^^^^^^^  ^^^^^^^
//!  header      payload
//! ```
//!
//! Values above [`MAX_NUMBER`] are ignored, negative values are rejected (all
//! of them are reported), and a sum that would not fit in an `i32` fails
//! instead of wrapping.

mod api;
mod engine;
mod error;


pub use api::{AddDetails, AddReport, StageSummary, add, add_verbose};
pub use engine::Stage;
pub use error::{CalcError, ErrorKind, Result};

/// Values strictly greater than this are dropped before summing.
pub const MAX_NUMBER: i32 = 1000;

/// Delimiters used when the input has no `//` header.
pub const DEFAULT_DELIMITERS: [&str; 2] = [",", "\n"];

// --- Internal types ---------------------------------------------------------

/// Output of delimiter extraction: the active delimiter set and the slice of
/// the input that holds the numbers.
///
/// Delimiters borrow from the input (custom header) or are `'static`
/// defaults, so extraction never allocates strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Extraction<'a> {
    /// Delimiters in source order.
    pub delimiters: Vec<&'a str>,
    /// Numeric payload (everything after the header line, or the whole input).
    pub payload: &'a str,
    /// Whether the delimiters came from a `//` header.
    pub custom: bool,
}

impl<'a> Extraction<'a> {
    pub fn defaults(payload: &'a str) -> Self {
        Extraction { delimiters: DEFAULT_DELIMITERS.to_vec(), payload, custom: false }
    }
}

/// Result of the threshold filter: values kept for summing and values
/// dropped for being above [`MAX_NUMBER`], both in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Filtered {
    pub kept: Vec<i32>,
    pub dropped: Vec<i32>,
}
