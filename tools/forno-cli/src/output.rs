//! Terminal output.
//!
//! Human-readable lines go to stdout, diagnostics to stderr. In `--json`
//! mode only [`Output::json`] and errors print, so stdout stays parseable.

use console::style;
use forno_commerce::cart::Cart;
use forno_commerce::catalog::{Category, Item};
use forno_commerce::PriceParser;

#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn info(&self, msg: &str) {
        if !self.json {
            println!("{} {}", style("ℹ").blue(), msg);
        }
    }

    pub fn success(&self, msg: &str) {
        if !self.json {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors print in both modes; JSON mode wraps them in an object.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only printed with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, title: &str) {
        if !self.json {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// Pretty JSON on stdout, regardless of mode.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(text) => println!("{}", text),
            Err(e) => self.error(&format!("Failed to encode JSON: {}", e)),
        }
    }

    /// Left-aligned columns padded to `widths`.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let row: Vec<String> = cols
            .iter()
            .zip(widths)
            .map(|(col, width)| format!("{:width$}", col, width = *width))
            .collect();
        println!("  {}", row.join("  ").trim_end());
    }

    /// One item, the way the browse screen shows it.
    pub fn item_card(&self, item: &Item, position: usize, count: usize) {
        if self.json {
            return;
        }
        let mut title = format!(
            "{} {}  {}",
            style(format!("[{}/{}]", position + 1, count)).dim(),
            style(&item.name).bold(),
            category_badge(item.category)
        );
        if let Some(badge) = &item.badge {
            title.push_str(&format!("  {}", style(badge).yellow()));
        }
        println!("\n{}", title);
        if let Some(subtitle) = &item.subtitle {
            println!("  {}", style(subtitle).italic());
        }
        println!("  {}", item.description);
        if !item.ingredients.is_empty() {
            println!("  {}", style(item.ingredients.join(" · ")).dim());
        }
        println!("  {}", style(&item.price).green().bold());
    }

    /// Cart lines followed by item count and total.
    pub fn cart(&self, cart: &Cart, parser: &PriceParser) {
        if self.json {
            return;
        }
        if cart.is_empty() {
            self.info("Cart is empty");
            return;
        }
        for entry in cart.entries() {
            let quantity = format!("x{}", entry.quantity);
            let line_total = parser.format(entry.line_total(parser));
            self.table_row(
                &[entry.item.id.as_str(), &entry.item.name, &quantity, &line_total],
                &[18, 18, 6, 12],
            );
        }
        self.kv("items", &cart.total_items().to_string());
        self.kv("total", &parser.format(cart.total_price(parser)));
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Category label colored per tab.
pub fn category_badge(category: Category) -> String {
    let label = style(category.label());
    match category {
        Category::Salgado => label.red(),
        Category::Doce => label.magenta(),
        Category::Bebida => label.cyan(),
    }
    .to_string()
}
