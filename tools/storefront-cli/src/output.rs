//! Output formatting for the CLI.

use console::{pad_str, style, Alignment};
use indicatif::{ProgressBar, ProgressStyle};
use storefront_core::badge::{Badge, BadgedProduct};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| pad_cell(col, *width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print badged products as a table.
    pub fn products(&self, products: &[BadgedProduct], lang: &str, fallback_lang: &str) {
        if self.json {
            return;
        }

        let widths = [12, 36, 10, 12];
        self.table_row(&["ID", "NAME", "PRICE", "BADGE"], &widths);
        for item in products {
            let product = &item.product;
            let price = format!("{:.2}", product.price);
            let badge = item.display_badge.as_ref().map(badge_label).unwrap_or_default();
            self.table_row(
                &[
                    product.id.as_str(),
                    product.display_name(lang, fallback_lang),
                    price.as_str(),
                    badge.as_str(),
                ],
                &widths,
            );
        }
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Left-align `col` in `width` visible columns. Escape codes take no space.
fn pad_cell(col: &str, width: usize) -> String {
    pad_str(col, width, Alignment::Left, None).into_owned()
}

/// Styled label for a product badge.
pub fn badge_label(badge: &Badge) -> String {
    match badge {
        Badge::Sale { discount_percent } => style(format!("-{}%", discount_percent)).red().to_string(),
        Badge::TopSeller => style("top seller").yellow().to_string(),
        Badge::New => style("new").green().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::measure_text_width;

    #[test]
    fn test_pad_cell_ignores_escape_codes() {
        let label = style("new").green().force_styling(true).to_string();
        assert!(label.len() > 3);

        let cell = pad_cell(&label, 12);
        assert_eq!(measure_text_width(&cell), 12);
        assert!(cell.starts_with(&label));
    }

    #[test]
    fn test_pad_cell_plain_text() {
        assert_eq!(pad_cell("p1", 4), "p1  ");
        assert_eq!(measure_text_width(&pad_cell("Lámpara", 10)), 10);
    }
}
