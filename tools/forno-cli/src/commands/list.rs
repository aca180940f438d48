//! List menu items matching a filter.

use anyhow::Result;
use forno_commerce::catalog::CategoryFilter;
use forno_commerce::search::filter;

use super::ListArgs;
use crate::context::Context;
use crate::output::category_badge;

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let category: CategoryFilter = args.category.parse()?;
    let catalog = ctx.load_catalog()?;
    let items = filter(catalog.items(), &args.query, category);

    if ctx.output.is_json() {
        ctx.output.json(&items);
        return Ok(());
    }

    ctx.output.header(&format!("Menu · {}", category.label()));
    if items.is_empty() {
        ctx.output.info("No results");
        return Ok(());
    }

    for (i, item) in items.iter().enumerate() {
        ctx.output.table_row(
            &[
                &(i + 1).to_string(),
                item.id.as_str(),
                &item.name,
                &category_badge(item.category),
                &item.price,
            ],
            &[3, 18, 18, 10, 10],
        );
    }
    ctx.output.debug(&format!("{} of {} items", items.len(), catalog.len()));

    Ok(())
}
