//! Parse and format failures.
//!
//! Messages are part of the observable contract and must not change wording.
//! Quoted values follow Go `strconv.Quote` escaping, see [`Quoted`].

use std::fmt;

use resname_ir::Quoted;
use thiserror::Error;

/// A name was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The name has a different number of `/`-separated parts than the
    /// pattern has segments.
    #[error("parse {}: bad number of segments, want: {want}, got: {got}", Quoted(.input))]
    SegmentCountMismatch {
        input: String,
        want: usize,
        got: usize,
    },

    /// First literal segment, left to right, that did not match.
    #[error(
        "parse {}: bad segment {position}, want: {}, got: {}",
        Quoted(.input),
        Quoted(.want),
        Quoted(.got)
    )]
    LiteralMismatch {
        input: String,
        position: usize,
        want: String,
        got: String,
    },

    /// A full name does not start with the resource's authority.
    #[error("parse {}: invalid prefix, want: {}", Quoted(.input), Quoted(.want))]
    PrefixMismatch { input: String, want: String },

    /// Every pattern of a multi-pattern resource rejected the name.
    #[error("no pattern matches input: {errors}")]
    NoPatternMatches { errors: PatternErrors },
}

/// Failure of one pattern inside a multi-pattern parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternError {
    /// Zero-based declared index of the pattern.
    pub pattern: usize,
    pub error: ParseError,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pattern {}: {}", self.pattern, self.error)
    }
}

/// Per-pattern failures in ascending pattern order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternErrors(Vec<PatternError>);

impl PatternErrors {
    pub fn new(errors: Vec<PatternError>) -> Self {
        PatternErrors(errors)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PatternError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a PatternErrors {
    type Item = &'a PatternError;
    type IntoIter = std::slice::Iter<'a, PatternError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PatternErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// A parsed name could not be formatted against a resource.
///
/// Only hand-built names can trigger these; names returned by a parse always
/// carry a shape and tag valid for the resource that produced them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format {ty}: pattern {pattern} out of range, resource has {count} patterns")]
    UnknownPattern {
        ty: String,
        pattern: usize,
        count: usize,
    },

    #[error("format {ty}: multi-pattern resource needs a name tagged with its pattern")]
    UntaggedName { ty: String },

    #[error("format {ty}: single-pattern resource got a name tagged with pattern {pattern}")]
    UnexpectedTag { ty: String, pattern: usize },
}
