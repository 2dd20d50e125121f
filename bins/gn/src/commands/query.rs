//! query command

use super::Context;
use anyhow::Result;
use serde_json::{json, Value};

pub fn run(ctx: &Context, params: &str) -> Result<()> {
    let value: Value = serde_json::from_str(params)
        .map_err(gn_core::Error::from)
        .map_err(|e| e.with_context("Parsing query parameters"))?;
    let query = gn_text::percent::percent_query(&value)?;
    ctx.emit(&json!({ "query": query }), &query)
}
