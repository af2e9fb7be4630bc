//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use market_catalog::{Product, Section};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
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

    /// Print one listing line under a category.
    pub fn product(&self, product: &Product, section: Section, favorite: bool) {
        if self.json {
            return;
        }
        println!("    {}", product_line(product, section, favorite));
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        let template = "{spinner:.green} {msg}";
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template(template) {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Format a listing as `[id] title · emoji city · price`.
///
/// Free listings never show a price even if one is attached.
pub fn product_line(product: &Product, section: Section, favorite: bool) -> String {
    let mut line = format!(
        "{} {} · {} {}",
        style(format!("[{}]", product.id)).dim(),
        product.title,
        product.location.emoji(),
        product.location.as_str(),
    );

    if section.shows_price() {
        if let Some(price) = product.price {
            line.push_str(&format!(" · {}", style(price.display()).green().bold()));
        }
    }

    if favorite {
        line.push_str(&format!(" {}", style("♥").red()));
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_catalog::{Location, Price};

    fn lamp() -> Product {
        Product::new(
            "5",
            "Lámpara de Mesa",
            "https://images.example.com/lamp.jpg",
            Location::Madrid,
        )
    }

    #[test]
    fn test_product_line_shows_price_for_priced_sections() {
        console::set_colors_enabled(false);

        let product = lamp().with_price(Price::euros(45));
        assert_eq!(
            product_line(&product, Section::SecondHand, false),
            "[5] Lámpara de Mesa · 🇪🇸 Madrid · 45€"
        );
        assert_eq!(
            product_line(&product, Section::Free, false),
            "[5] Lámpara de Mesa · 🇪🇸 Madrid"
        );
    }

    #[test]
    fn test_product_line_marks_favorites() {
        console::set_colors_enabled(false);

        assert!(product_line(&lamp(), Section::Free, true).ends_with(" ♥"));
        assert!(!product_line(&lamp(), Section::Free, false).contains('♥'));
    }
}
