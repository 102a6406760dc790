//! Template compilation.
//!
//! A template is split on `/` into parts. Parts wrapped in braces become
//! variables, everything else is kept verbatim as a literal. Empty parts
//! (from a leading, trailing or doubled `/`) are kept as empty literals, so
//! such a pattern only matches names with the same empty components.

use std::fmt;
use std::str::FromStr;

use crate::naming;
use crate::CompileError;

/// One atom of a compiled template.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Fixed text that must match the name component byte for byte.
    Literal(String),
    /// A captured component.
    Variable(Variable),
}

impl Segment {
    pub fn is_variable(&self) -> bool {
        matches!(self, Segment::Variable(_))
    }
}

/// A variable segment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Variable {
    /// Declared name, the text between the braces.
    pub name: String,
    /// Position among the pattern's variables (not among its segments).
    pub index: usize,
}

impl Variable {
    /// Identifier of the field holding this variable in a parsed value.
    pub fn field_ident(&self) -> String {
        naming::field_ident(&self.name)
    }
}

/// A compiled template: an ordered list of segments.
///
/// Variable indices are assigned left to right starting at 0, so they are
/// always unique and contiguous.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    template: String,
    segments: Vec<Segment>,
    variables: usize,
}

impl Pattern {
    /// Compile a template string.
    pub fn compile(template: &str) -> Result<Self, CompileError> {
        let mut segments = Vec::new();
        let mut names: Vec<&str> = Vec::new();

        for part in template.split('/') {
            let Some(open) = part.strip_prefix('{') else {
                segments.push(Segment::Literal(part.to_owned()));
                continue;
            };
            let Some(name) = open.strip_suffix('}') else {
                return Err(CompileError::InvalidSegment(part.to_owned()));
            };
            if names.contains(&name) {
                return Err(CompileError::DuplicateVariable {
                    template: template.to_owned(),
                    name: name.to_owned(),
                });
            }

            segments.push(Segment::Variable(Variable {
                name: name.to_owned(),
                index: names.len(),
            }));
            names.push(name);
        }

        tracing::trace!(template, segments = segments.len(), "compiled pattern");

        Ok(Pattern {
            template: template.to_owned(),
            segments,
            variables: names.len(),
        })
    }

    /// The template this pattern was compiled from.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments, i.e. the number of `/`-separated components a
    /// matching name has.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`: splitting even an empty template yields one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn variable_count(&self) -> usize {
        self.variables
    }

    /// Variable segments in index order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Variable(var) => Some(var),
            Segment::Literal(_) => None,
        })
    }
}

impl FromStr for Pattern {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::compile(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}
