//! Plain listing command.

use anyhow::{Context as _, Result};
use chrono::Utc;
use storefront_core::listing::ListingQuery;

use super::ListArgs;
use crate::context::Context;

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let engine = ctx.engine()?;
    let lang = engine.resolve_lang(args.lang.candidate());
    let logger = ctx.request_logger("list", &args.query);

    let query = ListingQuery::from_query_string(&args.query, &lang);
    let listed = engine
        .list_at(&query, args.now.unwrap_or_else(Utc::now))
        .context("Listing failed")?;

    logger
        .info_builder("request completed")
        .field("lang", lang.as_str())
        .field_i64("total", listed.len() as i64)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&listed);
        return Ok(());
    }

    ctx.output.header(&format!("{} product(s)", listed.len()));
    if !listed.is_empty() {
        ctx.output
            .products(&listed, &lang, &engine.config().default_lang);
    }

    Ok(())
}
