//! Single-pattern parse and format.

use resname_ir::{Pattern, Segment};

use crate::{ParseError, ParsedName};

/// Parse a relative name against one pattern.
///
/// The name must have exactly as many `/`-separated parts as the pattern has
/// segments. Literals are compared left to right and the first mismatch is
/// reported; variables capture their part as is.
pub fn parse(pattern: &Pattern, s: &str) -> Result<ParsedName, ParseError> {
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != pattern.len() {
        return Err(ParseError::SegmentCountMismatch {
            input: s.to_owned(),
            want: pattern.len(),
            got: parts.len(),
        });
    }

    let mut out = ParsedName::with_capacity(pattern.variable_count());
    for (position, (segment, part)) in pattern.segments().iter().zip(parts).enumerate() {
        match segment {
            Segment::Literal(text) => {
                if text != part {
                    return Err(ParseError::LiteralMismatch {
                        input: s.to_owned(),
                        position,
                        want: text.clone(),
                        got: part.to_owned(),
                    });
                }
            }
            Segment::Variable(var) => out.insert(var.name.as_str(), part),
        }
    }

    Ok(out)
}

/// Parse a full name: `authority` followed by a relative name.
///
/// A missing prefix is reported against the original input. Errors from the
/// relative parse are reported against the remainder after the prefix.
pub fn parse_full(pattern: &Pattern, authority: &str, s: &str) -> Result<ParsedName, ParseError> {
    parse(pattern, strip_authority(authority, s)?)
}

/// Render a relative name. Variables missing from `name` render empty.
pub fn format(pattern: &Pattern, name: &ParsedName) -> String {
    let mut out = String::new();
    for (i, segment) in pattern.segments().iter().enumerate() {
        if i > 0 {
            out.push('/');
        }
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Variable(var) => out.push_str(name.get(&var.name).unwrap_or_default()),
        }
    }
    out
}

/// Render a full name: `authority` followed by [`format`].
pub fn format_full(pattern: &Pattern, authority: &str, name: &ParsedName) -> String {
    let mut out = authority.to_owned();
    out.push_str(&format(pattern, name));
    out
}

pub(crate) fn strip_authority<'a>(authority: &str, s: &'a str) -> Result<&'a str, ParseError> {
    s.strip_prefix(authority)
        .ok_or_else(|| ParseError::PrefixMismatch {
            input: s.to_owned(),
            want: authority.to_owned(),
        })
}

#[cfg(test)]
mod tests;
