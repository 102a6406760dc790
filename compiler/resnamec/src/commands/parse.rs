//! The `parse` and `parse-full` commands.

use std::io::Write;

use resname_match::{resolver, ResourceName};
use resname_schema::Schema;

use super::{lookup, CommandError};

/// Parse `name` against resource `ty` and print the captured fields.
///
/// Multi-pattern results are preceded by the matching pattern's index. A
/// rejected name is returned as [`CommandError::Parse`] with the resolver's
/// message untouched.
pub fn parse_name(
    schema: &Schema,
    ty: &str,
    name: &str,
    full: bool,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let resource = lookup(schema, ty)?;
    let parsed = if full {
        resolver::parse_full(resource, name)?
    } else {
        resolver::parse(resource, name)?
    };

    if let ResourceName::Variant { pattern, .. } = &parsed {
        writeln!(out, "pattern {pattern}")?;
    }
    for (field, value) in parsed.parsed().iter() {
        writeln!(out, "{field}={value}")?;
    }
    Ok(())
}
