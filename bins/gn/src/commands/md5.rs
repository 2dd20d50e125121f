//! md5 command

use super::Context;
use anyhow::Result;
use gn_cli::{format_size, Status};
use gn_core::ResultExt;
use serde_json::json;
use std::io::Read;
use std::path::Path;

/// Digest `text`, `file` or stdin, or verify the data against `verify`.
pub fn run(ctx: &Context, text: Option<&str>, file: Option<&Path>, verify: Option<&str>) -> Result<()> {
    let data = read_input(text, file)?;
    tracing::debug!(bytes = data.len(), "Digesting input");

    if let Some(expected) = verify {
        gn_crypto::verify_md5(&data, expected)?;
        if ctx.json {
            gn_cli::print_json(&json!({ "match": true, "expected": expected.trim().to_ascii_lowercase() }))?;
        } else if !ctx.quiet {
            Status::success("Digest matches");
        }
        return Ok(());
    }

    let digest = gn_crypto::md5_hex(&data);
    let text = match file {
        Some(path) => format!("{digest}  {}", path.display()),
        None => digest.clone(),
    };
    ctx.emit(
        &json!({
            "md5": digest,
            "size": format_size(data.len() as u64),
            "file": file.map(|p| p.display().to_string()),
        }),
        &text,
    )
}

fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<Vec<u8>> {
    if let Some(path) = file {
        let data = std::fs::read(path)
            .map_err(gn_core::Error::from)
            .context(format!("Reading {}", path.display()))?;
        return Ok(data);
    }
    if let Some(text) = text {
        return Ok(text.as_bytes().to_vec());
    }

    let mut data = Vec::new();
    std::io::stdin()
        .read_to_end(&mut data)
        .map_err(gn_core::Error::from)
        .context("Reading stdin")?;
    Ok(data)
}
