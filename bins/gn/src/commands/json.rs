//! json command

use super::Context;
use anyhow::Result;
use std::path::Path;

/// Pretty-print the top-level object of the file at `path`.
pub fn run(_ctx: &Context, path: &Path) -> Result<()> {
    let Some(object) = gn_core::fs::json_from_file(path)? else {
        return Err(gn_core::Error::json_not_object(path.display().to_string()).into());
    };
    gn_cli::print_json(&object)?;
    Ok(())
}
