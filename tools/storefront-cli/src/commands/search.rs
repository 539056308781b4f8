//! Faceted search command.

use anyhow::{Context as _, Result};
use chrono::Utc;
use storefront_core::search::{SearchReply, SearchRequest, SearchResponse};

use super::SearchArgs;
use crate::context::Context;
use crate::output::Output;

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let engine = ctx.engine()?;
    let lang = engine.resolve_lang(args.lang.candidate());
    let now = args.now.unwrap_or_else(Utc::now);
    let logger = ctx.request_logger("search", &args.query);

    let request = SearchRequest::from_query_string(&args.query, &lang);
    let reply = engine
        .handle_at(&request, now)
        .context("Search failed")?;

    let mut summary = logger.info_builder("request completed").field("lang", lang.as_str());
    summary = match &reply {
        SearchReply::Results(response) => summary
            .field_i64("total", response.total_products as i64)
            .field_bool("suggestions", false),
        SearchReply::Suggestions(response) => summary
            .field_i64("total", response.suggestions.len() as i64)
            .field_bool("suggestions", true),
    };
    summary.emit();

    if ctx.output.is_json() {
        ctx.output.json(&reply);
        return Ok(());
    }

    match &reply {
        SearchReply::Results(response) => {
            print_results(&ctx.output, response, &lang, &engine.config().default_lang)
        }
        SearchReply::Suggestions(response) => {
            ctx.output.header("Suggestions");
            for suggestion in &response.suggestions {
                ctx.output.list_item(suggestion);
            }
        }
    }

    Ok(())
}

fn print_results(output: &Output, response: &SearchResponse, lang: &str, fallback_lang: &str) {
    output.header(&format!("{} product(s)", response.total_products));
    output.kv(
        "price range",
        &format!("{} - {}", response.price_range.min, response.price_range.max),
    );

    if !response.products.is_empty() {
        output.info("");
        output.products(&response.products, lang, fallback_lang);
    }

    let facets = &response.available_filters;
    if facets.is_empty() {
        return;
    }

    output.header("Available filters");
    for group in facets.quick_filters.iter().chain(&facets.modal_filters) {
        let options: Vec<&str> = group.options.iter().map(|o| o.name.as_str()).collect();
        output.kv(&group.name, &options.join(", "));
    }
    if !facets.colors.is_empty() {
        let colors: Vec<String> = facets
            .colors
            .iter()
            .map(|c| format!("{} ({})", c.color_name, c.color_code))
            .collect();
        output.kv("colors", &colors.join(", "));
    }
    if !facets.sizes.is_empty() {
        output.kv("sizes", &facets.sizes.join(", "));
    }
}
