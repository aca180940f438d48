//! Build an order from item ids.

use anyhow::{bail, Result};
use forno_commerce::cart::CartStore;
use forno_commerce::checkout::finalize;
use forno_commerce::ItemId;

use super::OrderArgs;
use crate::context::Context;

/// Run the order command.
pub fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let mut store = CartStore::new(ctx.parser());

    for raw in &args.items {
        let id = ItemId::new(raw.as_str());
        match catalog.get(&id) {
            Some(item) => {
                store.add_item(item);
            }
            None => bail!("Unknown item: {}", raw),
        }
    }

    let order = finalize(store.cart(), store.parser())?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.header("Cart");
    ctx.output.cart(store.cart(), store.parser());

    ctx.output.header("Order request");
    println!("{}", order.to_json()?);
    ctx.output.success(&format!("Order {} ready: {}", order.id, order.total_display));

    Ok(())
}
