//! Range predicate extraction from SPARQL query text.
//!
//! This does not parse SPARQL. Each rule searches the raw query text for one structural signal
//! (a `faldo:reference` object or a bound comparison in a `FILTER`) and falls back to a default
//! when the signal is absent.

use std::{num::ParseIntError, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

pub const DEFAULT_REFERENCE_NAME: &str = "chr1";
pub const DEFAULT_START: u64 = 0;
pub const DEFAULT_END: u64 = 1_000_000;

static REFERENCE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/([^/]+)>\s*\.?\s*(?:FILTER|BIND|$)").expect("invalid reference name regex")
});

// Bound terms are captured as a bare token rather than a digit run so that a present but
// malformed literal is reported instead of being ignored.
static START_BOUND_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\?start\s*>=\s*([^\s()&|,;}]+)").expect("invalid start bound regex")
});

static END_BOUND_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\?end\s*<=\s*([^\s()&|,;}]+)").expect("invalid end bound regex")
});

/// A reference sequence name and coordinate range resolved from query text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RangePredicate {
    pub reference_name: String,
    pub start: u64,
    pub end: u64,
}

impl Default for RangePredicate {
    fn default() -> Self {
        Self {
            reference_name: DEFAULT_REFERENCE_NAME.into(),
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum QueryParseError {
    #[error("invalid start value: {0}")]
    InvalidStart(#[source] ParseIntError),
    #[error("invalid end value: {0}")]
    InvalidEnd(#[source] ParseIntError),
}

/// Resolves a range predicate from query text.
///
/// Missing patterns resolve to [`DEFAULT_REFERENCE_NAME`], [`DEFAULT_START`], and
/// [`DEFAULT_END`]. This only fails when a bound comparison is present but its value is not a
/// non-negative integer.
pub fn interpret(query: &str) -> Result<RangePredicate, QueryParseError> {
    let reference_name = reference_name(query).unwrap_or(DEFAULT_REFERENCE_NAME);

    let start = start_bound(query)
        .transpose()
        .map_err(QueryParseError::InvalidStart)?
        .unwrap_or(DEFAULT_START);

    let end = end_bound(query)
        .transpose()
        .map_err(QueryParseError::InvalidEnd)?
        .unwrap_or(DEFAULT_END);

    Ok(RangePredicate {
        reference_name: reference_name.into(),
        start,
        end,
    })
}

/// Returns the last path segment of the IRI that ends a triple, e.g., `chr1` in
/// `faldo:reference <http://example.org/chr1> . FILTER (…)`.
pub fn reference_name(query: &str) -> Option<&str> {
    REFERENCE_NAME_REGEX
        .captures(query)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Returns the value of the first `?start >= <n>` comparison.
pub fn start_bound(query: &str) -> Option<Result<u64, ParseIntError>> {
    bound(&START_BOUND_REGEX, query)
}

/// Returns the value of the first `?end <= <n>` comparison.
pub fn end_bound(query: &str) -> Option<Result<u64, ParseIntError>> {
    bound(&END_BOUND_REGEX, query)
}

fn bound(regex: &Regex, query: &str) -> Option<Result<u64, ParseIntError>> {
    regex
        .captures(query)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().parse())
}
