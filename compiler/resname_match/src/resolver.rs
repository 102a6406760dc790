//! Resource-level parse and format.
//!
//! Single-pattern resources behave exactly like their pattern and produce
//! [`ResourceName::Single`]. Multi-pattern resources try their patterns in
//! declared order:
//!
//! - the first pattern that accepts the name wins and its index tags the
//!   result;
//! - if none does, every per-pattern error is returned, in declared order,
//!   inside [`ParseError::NoPatternMatches`].
//!
//! Full-name parsing checks the shared authority once, before any pattern is
//! tried.

use resname_ir::{Pattern, Resource};
use tracing::trace;

use crate::error::{PatternError, PatternErrors};
use crate::matcher::{self, strip_authority};
use crate::{FormatError, ParseError, ResourceName};

/// Parse a relative name against a resource.
#[tracing::instrument(level = "trace", skip(resource), fields(ty = %resource.ty()))]
pub fn parse(resource: &Resource, s: &str) -> Result<ResourceName, ParseError> {
    let patterns = resource.patterns();
    if let [pattern] = patterns {
        return matcher::parse(pattern, s).map(ResourceName::Single);
    }

    let mut errors = Vec::with_capacity(patterns.len());
    for (index, pattern) in patterns.iter().enumerate() {
        match matcher::parse(pattern, s) {
            Ok(name) => {
                trace!(pattern = index, "pattern matched");
                return Ok(ResourceName::Variant {
                    pattern: index,
                    name,
                });
            }
            Err(error) => {
                trace!(pattern = index, %error, "pattern rejected name");
                errors.push(PatternError {
                    pattern: index,
                    error,
                });
            }
        }
    }

    Err(ParseError::NoPatternMatches {
        errors: PatternErrors::new(errors),
    })
}

/// Parse a full name against a resource.
///
/// A missing authority yields a single [`ParseError::PrefixMismatch`] and no
/// pattern is attempted.
pub fn parse_full(resource: &Resource, s: &str) -> Result<ResourceName, ParseError> {
    parse(resource, strip_authority(resource.authority(), s)?)
}

/// Render the relative form of `name` with the pattern its tag selects.
pub fn format(resource: &Resource, name: &ResourceName) -> Result<String, FormatError> {
    let pattern = select(resource, name)?;
    Ok(matcher::format(pattern, name.parsed()))
}

/// Render the full form of `name`.
pub fn format_full(resource: &Resource, name: &ResourceName) -> Result<String, FormatError> {
    let pattern = select(resource, name)?;
    Ok(matcher::format_full(pattern, resource.authority(), name.parsed()))
}

fn select<'r>(resource: &'r Resource, name: &ResourceName) -> Result<&'r Pattern, FormatError> {
    let ty = || resource.ty().to_string();
    match (resource.patterns(), name) {
        ([pattern], ResourceName::Single(_)) => Ok(pattern),
        ([_], ResourceName::Variant { pattern, .. }) => Err(FormatError::UnexpectedTag {
            ty: ty(),
            pattern: *pattern,
        }),
        (_, ResourceName::Single(_)) => Err(FormatError::UntaggedName { ty: ty() }),
        (patterns, ResourceName::Variant { pattern, .. }) => {
            patterns.get(*pattern).ok_or_else(|| FormatError::UnknownPattern {
                ty: ty(),
                pattern: *pattern,
                count: patterns.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests;
