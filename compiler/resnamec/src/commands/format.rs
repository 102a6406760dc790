//! The `format` command.

use std::io::Write;

use resname_ir::quote::quote;
use resname_match::{resolver, ParsedName, ResourceName};
use resname_schema::Schema;

use super::{lookup, CommandError};

/// Arguments of `format` after the resource type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Pattern tag; `None` formats an untagged name.
    pub pattern: Option<usize>,
    /// Prefix the authority.
    pub full: bool,
    pub fields: ParsedName,
}

impl FormatOptions {
    /// Parse `[--pattern N] [--full] key=value...` in any order.
    pub fn parse(args: &[String]) -> Result<Self, CommandError> {
        let mut options = FormatOptions::default();
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            if arg == "--full" {
                options.full = true;
            } else if arg == "--pattern" {
                let Some(value) = args.next() else {
                    return Err(CommandError::InvalidArgument(
                        "--pattern requires an index".to_owned(),
                    ));
                };
                options.pattern = Some(parse_index(value)?);
            } else if let Some(value) = arg.strip_prefix("--pattern=") {
                options.pattern = Some(parse_index(value)?);
            } else if let Some((key, value)) = arg.split_once('=') {
                options.fields.insert(key, value);
            } else {
                return Err(CommandError::InvalidArgument(format!(
                    "expected key=value, got {}",
                    quote(arg)
                )));
            }
        }
        Ok(options)
    }
}

fn parse_index(value: &str) -> Result<usize, CommandError> {
    value.parse().map_err(|_| {
        CommandError::InvalidArgument(format!("invalid pattern index {}", quote(value)))
    })
}

/// Render the name described by `options` for resource `ty`.
pub fn format_name(
    schema: &Schema,
    ty: &str,
    options: FormatOptions,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let resource = lookup(schema, ty)?;
    let name = match options.pattern {
        Some(pattern) => ResourceName::Variant {
            pattern,
            name: options.fields,
        },
        None => ResourceName::Single(options.fields),
    };

    let rendered = if options.full {
        resolver::format_full(resource, &name)?
    } else {
        resolver::format(resource, &name)?
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}
