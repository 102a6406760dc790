//! The `describe` command: list every derived identifier.

use std::io::Write;

use resname_schema::{AccessorKind, ResourceDescriptor, Schema};

use super::CommandError;

/// Print each resource with its identifiers, patterns and field
/// identifiers, followed by every record accessor.
pub fn describe(schema: &Schema, out: &mut impl Write) -> Result<(), CommandError> {
    for resource in schema.descriptors() {
        write_resource(&resource, out)?;
    }

    let accessors = schema.accessor_descriptors();
    if !accessors.is_empty() {
        writeln!(out, "accessors")?;
    }
    for accessor in accessors {
        let kind = match accessor.kind {
            AccessorKind::NameField => "name field",
            AccessorKind::Reference => "reference",
        };
        writeln!(
            out,
            "  {}.{}() -> {} ({kind} {:?})",
            accessor.record, accessor.ident, accessor.returns, accessor.field,
        )?;
    }
    Ok(())
}

fn write_resource(
    resource: &ResourceDescriptor<'_>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let idents = resource.idents;
    writeln!(out, "{}", resource.resource.ty())?;
    writeln!(out, "  authority: {}", resource.resource.authority())?;
    writeln!(out, "  parse: {}", idents.parse_fn)?;
    writeln!(out, "  parse full: {}", idents.parse_full_fn)?;
    writeln!(out, "  parsed: {}", idents.parsed_type)?;

    for variant in &resource.variants {
        match &variant.idents {
            Some(v) => writeln!(
                out,
                "  pattern {}: {} ({}, {}, {})",
                v.index, variant.pattern, v.parsed_type, v.parse_fn, v.parse_full_fn,
            )?,
            None => writeln!(out, "  pattern: {}", variant.pattern)?,
        }
        for field in &variant.fields {
            writeln!(out, "    {} <- {{{}}}", field.ident, field.name)?;
        }
    }
    Ok(())
}
