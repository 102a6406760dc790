//! The `check` command: compile a manifest and summarize it.

use std::io::Write;

use resname_schema::Schema;

use super::CommandError;

pub fn check(schema: &Schema, out: &mut impl Write) -> Result<(), CommandError> {
    let accessors: usize = schema.records().iter().map(|r| r.accessors.len()).sum();
    writeln!(
        out,
        "ok: {} resources, {} records, {} accessors",
        schema.resources().len(),
        schema.records().len(),
        accessors,
    )?;
    Ok(())
}
