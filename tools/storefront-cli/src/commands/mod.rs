//! CLI command implementations.

pub mod carousel;
pub mod config;
pub mod list;
pub mod search;
pub mod suggest;

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

use crate::context::parse_now;

/// Request language options shared by the catalog commands.
#[derive(Args)]
pub struct LangArgs {
    /// Language code (falls back to the configured default).
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Accept-Language header value, used when --lang is absent.
    #[arg(long)]
    pub accept_language: Option<String>,
}

impl LangArgs {
    pub fn candidate(&self) -> Option<&str> {
        self.lang.as_deref().or(self.accept_language.as_deref())
    }
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// URL query string, e.g. "q=shirt&onSale=true&sortBy=price".
    #[arg(default_value = "")]
    pub query: String,

    #[command(flatten)]
    pub lang: LangArgs,

    /// Evaluate recency rules as of this RFC 3339 instant.
    #[arg(long, value_parser = parse_now)]
    pub now: Option<DateTime<Utc>>,
}

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// Partial search text.
    pub q: String,

    #[command(flatten)]
    pub lang: LangArgs,
}

/// Arguments for the carousel command.
#[derive(Args)]
pub struct CarouselArgs {
    #[command(flatten)]
    pub lang: LangArgs,

    /// Evaluate recency rules as of this RFC 3339 instant.
    #[arg(long, value_parser = parse_now)]
    pub now: Option<DateTime<Utc>>,
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// URL query string, e.g. "categoryId=ropa&isNew=true".
    #[arg(default_value = "")]
    pub query: String,

    #[command(flatten)]
    pub lang: LangArgs,

    /// Evaluate recency rules as of this RFC 3339 instant.
    #[arg(long, value_parser = parse_now)]
    pub now: Option<DateTime<Utc>>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new storefront.toml
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Validate configuration and load the catalog
    Validate,
}
