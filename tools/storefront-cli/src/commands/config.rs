//! Configuration management commands.

use std::fs;
use std::io::IsTerminal;

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use storefront_core::catalog::CatalogStore;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let catalog = &ctx.config.catalog;
    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv("products", &catalog.products.display().to_string());
    if let Some(categories) = &catalog.categories {
        ctx.output.kv("categories", &categories.display().to_string());
    }
    if let Some(taxonomy) = &catalog.taxonomy {
        ctx.output.kv("taxonomy", &taxonomy.display().to_string());
    }

    let search = &ctx.config.search;
    ctx.output.info("");
    ctx.output.info("[search]");
    ctx.output.kv("default_lang", &search.default_lang);
    ctx.output.kv("supported_langs", &search.supported_langs.join(", "));
    ctx.output.kv("new_within_days", &search.new_within_days.to_string());
    ctx.output.kv(
        "listing_new_within_days",
        &search.listing_new_within_days.to_string(),
    );
    ctx.output.kv("carousel_limit", &search.carousel_limit.to_string());
    ctx.output.kv("suggestion_limit", &search.suggestion_limit.to_string());

    ctx.output.info("");
    ctx.output.info("[search.badges]");
    ctx.output.kv(
        "top_seller_min_rating",
        &search.badges.top_seller_min_rating.to_string(),
    );
    ctx.output.kv(
        "top_seller_min_rating_count",
        &search.badges.top_seller_min_rating_count.to_string(),
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("storefront.toml");

    if config_path.exists() && !force {
        let interactive = std::io::stdin().is_terminal() && !ctx.output.is_json();
        let overwrite = interactive
            && Confirm::new()
                .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
                .default(false)
                .interact()?;

        if !overwrite {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let search = &ctx.config.search;

    if search.supported_langs.is_empty() {
        errors.push("search.supported_langs must not be empty".to_string());
    } else if !search.supported_langs.contains(&search.default_lang) {
        errors.push(format!(
            "search.default_lang '{}' is not in search.supported_langs",
            search.default_lang
        ));
    }

    if search.new_within_days < 0 || search.listing_new_within_days < 0 {
        errors.push("recency windows must not be negative".to_string());
    }
    if search.new_within_days != search.listing_new_within_days {
        warnings.push(format!(
            "listing treats {} days as new, search and badges use {}",
            search.listing_new_within_days, search.new_within_days
        ));
    }

    if search.carousel_limit == 0 {
        warnings.push("search.carousel_limit is 0; the carousel will always be empty".to_string());
    }
    if search.suggestion_limit == 0 {
        warnings.push("search.suggestion_limit is 0; suggestions are disabled".to_string());
    }

    let spinner = ctx.output.spinner("Loading catalog...");
    let loaded = ctx.engine().and_then(|engine| {
        let products = engine.store().list_products()?;
        let categories = engine.store().list_categories()?;
        Ok((products.len(), categories.len(), engine.taxonomy().index().len()))
    });
    spinner.finish_and_clear();

    match loaded {
        Ok((products, categories, tags)) => {
            ctx.output.kv("products", &products.to_string());
            ctx.output.kv("categories", &categories.to_string());
            ctx.output.kv("indexed tags", &tags.to_string());
            if products == 0 {
                warnings.push("catalog has no products".to_string());
            }
        }
        Err(e) => errors.push(format!("{:#}", e)),
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
