//! Carousel selection command.

use anyhow::{Context as _, Result};
use chrono::Utc;

use super::CarouselArgs;
use crate::context::Context;

/// Run the carousel command.
pub fn run(args: CarouselArgs, ctx: &Context) -> Result<()> {
    let engine = ctx.engine()?;
    let lang = engine.resolve_lang(args.lang.candidate());
    let logger = ctx.request_logger("carousel", "");

    let selected = engine
        .carousel_at(args.now.unwrap_or_else(Utc::now))
        .context("Carousel selection failed")?;

    logger
        .info_builder("request completed")
        .field_i64("total", selected.len() as i64)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&selected);
        return Ok(());
    }

    ctx.output.header("Carousel");
    if selected.is_empty() {
        ctx.output.info("Nothing to show");
        return Ok(());
    }
    ctx.output
        .products(&selected, &lang, &engine.config().default_lang);

    Ok(())
}
