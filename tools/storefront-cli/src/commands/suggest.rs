//! Autocomplete command.

use anyhow::{Context as _, Result};
use storefront_core::search::SuggestQuery;

use super::SuggestArgs;
use crate::context::Context;

/// Run the suggest command.
pub fn run(args: SuggestArgs, ctx: &Context) -> Result<()> {
    let engine = ctx.engine()?;
    let lang = engine.resolve_lang(args.lang.candidate());
    let logger = ctx.request_logger("suggest", &args.q);

    let reply = engine
        .suggest(&SuggestQuery::new(args.q.as_str(), lang.as_str()))
        .context("Suggestion lookup failed")?;

    logger
        .info_builder("request completed")
        .field("lang", lang.as_str())
        .field_i64("total", reply.suggestions.len() as i64)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&reply);
        return Ok(());
    }

    if reply.suggestions.is_empty() {
        ctx.output.info("No suggestions");
        return Ok(());
    }

    for suggestion in &reply.suggestions {
        ctx.output.list_item(suggestion);
    }

    Ok(())
}
