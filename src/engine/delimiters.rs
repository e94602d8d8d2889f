//! Delimiter extraction (stage a).
//!
//! Splits the raw input into the active delimiter set and the numeric
//! payload.
//!
//! ```text
//! "1,2\n3"            -> delimiters [",", "\n"]   payload "1,2\n3"
//! "//[*][%%]\n1*2%%3" -> delimiters ["*", "%%"]   payload "1*2%%3"
//! "//[*]"             -> NumbersDefinition        (no newline)
//! "//[4]\n4"          -> DelimiterDefinition      (digit in delimiter)
//! ```
//!
//! The newline check runs before the header grammar check, so a `//` input
//! without any newline is always a numbers error even if its header is also
//! malformed.

use crate::Extraction;
use crate::error::{CalcError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Marker that opens a delimiter-definition header.
const HEADER_MARKER: &str = "//";

/// Whole-header grammar: `//` followed by one or more `[...]` groups and
/// nothing else. Group bodies exclude `[`, `]`, `-`, ASCII digits and `\n`.
static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^//(?:\[[^\[\]\-0-9\n]+\])+$").unwrap());

/// A single `[...]` group; used to pull the bodies out once `HEADER` matched.
static GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\[\]\-0-9\n]+)\]").unwrap());

/// Determine the delimiter set and payload for `input`.
pub(crate) fn extract(input: &str) -> Result<Extraction<'_>> {
    if !input.starts_with(HEADER_MARKER) {
        debug!(payload_len = input.len(), "no delimiter header, using defaults");
        return Ok(Extraction::defaults(input));
    }

    let (header, payload) = input.split_once('\n').ok_or(CalcError::NumbersDefinition)?;

    if !HEADER.is_match(header) {
        debug!(header, "delimiter header does not match grammar");
        return Err(CalcError::DelimiterDefinition);
    }

    let delimiters: Vec<&str> =
        GROUP.captures_iter(header).filter_map(|caps| caps.get(1)).map(|m| m.as_str()).collect();

    debug!(?delimiters, payload_len = payload.len(), "custom delimiters extracted");

    Ok(Extraction { delimiters, payload, custom: true })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_input_uses_defaults() {
        let ex = extract("1,2\n3").unwrap();
        assert_eq!(ex.delimiters, vec![",", "\n"]);
        assert_eq!(ex.payload, "1,2\n3");
        assert!(!ex.custom);
    }

    #[test]
    fn empty_input_uses_defaults() {
        let ex = extract("").unwrap();
        assert_eq!(ex.payload, "");
        assert!(!ex.custom);
    }

    #[test]
    fn single_slash_is_not_a_header() {
        let ex = extract("/1").unwrap();
        assert!(!ex.custom);
        assert_eq!(ex.payload, "/1");
    }

    #[test]
    fn header_groups_keep_source_order() {
        let ex = extract("//[**][;;;;;][%%%]\n4;;;;;8%%%333**5").unwrap();
        assert_eq!(ex.delimiters, vec!["**", ";;;;;", "%%%"]);
        assert_eq!(ex.payload, "4;;;;;8%%%333**5");
        assert!(ex.custom);
    }

    #[test]
    fn payload_is_everything_after_first_newline() {
        let ex = extract("//[;]\n1;2\n3").unwrap();
        assert_eq!(ex.delimiters, vec![";"]);
        assert_eq!(ex.payload, "1;2\n3");
    }

    #[test]
    fn header_with_empty_payload() {
        let ex = extract("//[;]\n").unwrap();
        assert_eq!(ex.payload, "");
    }

    #[test]
    fn special_characters_are_allowed_in_groups() {
        let ex = extract("//[}][)][?][*][+][.][>][\\d][\t]\n1").unwrap();
        assert_eq!(ex.delimiters, vec!["}", ")", "?", "*", "+", ".", ">", "\\d", "\t"]);
    }

    #[test]
    fn missing_newline_is_numbers_error() {
        assert_eq!(extract("//4[;8[;333;5"), Err(CalcError::NumbersDefinition));
        assert_eq!(extract("//[;]"), Err(CalcError::NumbersDefinition));
        assert_eq!(extract("//"), Err(CalcError::NumbersDefinition));
    }

    #[test]
    fn malformed_headers_are_delimiter_errors() {
        let cases = [
            "//[4]\n4'8:333'5",
            "//[]\n4'8:333'5",
            "//\n4[;8[;333;5",
            "//;\n1;2",
            "//[;\n1;2",
            "//;]\n1;2",
            "//[;]x\n1;2",
            "//[a-b]\n1",
            "//[[]\n1",
            "//[a1]\n1",
        ];
        for input in cases {
            assert_eq!(extract(input), Err(CalcError::DelimiterDefinition), "input: {input:?}");
        }
    }
}
