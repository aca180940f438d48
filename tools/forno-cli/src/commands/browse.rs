//! Interactive menu browsing.
//!
//! Reads one command per line and drives a [`MenuSession`]. Prints the
//! current item after every navigation or filter change.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use forno_commerce::catalog::CategoryFilter;
use forno_commerce::navigation::{Direction, NavigationIntent};
use forno_commerce::session::MenuSession;
use forno_commerce::ItemId;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::Output;

const HELP: &str = "\
n / p          next / previous item
<number>       jump to item (1-based)
/<text>        search (\"/\" alone clears)
c <category>   all, salgado, doce, bebida
a              add current item to cart
+ <id>         one more of an item
- <id>         one less of an item
rm <id>        remove an item
clear          empty the cart
cart           show the cart
done           finalize the order
q              quit";

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Navigate(NavigationIntent),
    Query(String),
    Category(CategoryFilter),
    Add,
    Increment(ItemId),
    Decrement(ItemId),
    Remove(ItemId),
    Clear,
    ShowCart,
    Done,
    Help,
    Quit,
}

/// Parse one line of input.
pub fn parse_input(line: &str) -> Result<Input, String> {
    let line = line.trim();

    if let Some(query) = line.strip_prefix('/') {
        return Ok(Input::Query(query.to_string()));
    }

    let (cmd, arg) = match line.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    };

    let id_arg = || {
        if arg.is_empty() {
            Err(format!("`{}` needs an item id", cmd))
        } else {
            Ok(ItemId::new(arg))
        }
    };

    match cmd {
        "n" | "next" => Ok(Input::Navigate(NavigationIntent::Next)),
        "p" | "prev" => Ok(Input::Navigate(NavigationIntent::Prev)),
        "c" | "category" => arg
            .parse()
            .map(Input::Category)
            .map_err(|e| e.to_string()),
        "a" | "add" => Ok(Input::Add),
        "+" => id_arg().map(Input::Increment),
        "-" => id_arg().map(Input::Decrement),
        "rm" => id_arg().map(Input::Remove),
        "clear" => Ok(Input::Clear),
        "cart" => Ok(Input::ShowCart),
        "done" => Ok(Input::Done),
        "h" | "help" | "?" => Ok(Input::Help),
        "q" | "quit" | "exit" => Ok(Input::Quit),
        other => match other.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(Input::Navigate(NavigationIntent::Select(n - 1))),
            _ => Err(format!("Unknown command: {} (h for help)", other)),
        },
    }
}

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let mut session = MenuSession::new(catalog, ctx.parser());

    let listener_output = ctx.output.clone();
    session.cart_mut().subscribe(move |event, cart| {
        listener_output.debug(&format!("{:?}", event));
        listener_output.info(&format!("Cart: {} item(s)", cart.total_items()));
    });

    session.set_category(args.category.parse::<CategoryFilter>()?);
    session.set_query(args.query);

    ctx.output.info("Type h for help.");
    show_current(&session, &ctx.output);

    let stdin = io::stdin();
    let stdout = io::stdout();
    browse_loop(&mut session, stdin.lock(), &mut stdout.lock(), &ctx.output)
}

/// Drive the session from a line reader until `q`, `done` or end of input.
///
/// The prompt and help text go to `term`, and only outside JSON mode.
pub fn browse_loop<R: BufRead, W: Write>(
    session: &mut MenuSession,
    reader: R,
    term: &mut W,
    output: &Output,
) -> Result<()> {
    prompt(term, output)?;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(term, output)?;
            continue;
        }

        match parse_input(&line) {
            Ok(Input::Quit) => break,
            Ok(Input::Done) => match session.finalize() {
                Ok(order) => {
                    output.json(&order);
                    break;
                }
                Err(e) => output.warn(&e.to_string()),
            },
            Ok(Input::Help) => {
                if !output.is_json() {
                    writeln!(term, "{}", HELP)?;
                }
            }
            Ok(input) => handle(session, input, output),
            Err(msg) => output.warn(&msg),
        }
        prompt(term, output)?;
    }
    Ok(())
}

fn handle(session: &mut MenuSession, input: Input, output: &Output) {
    match input {
        Input::Navigate(intent) => {
            let before = session.navigation();
            let after = session.apply(intent);
            if before.active_index == after.active_index && after.direction == before.direction {
                output.debug("no move");
            }
            show_current(session, output);
        }
        Input::Query(query) => {
            session.set_query(query);
            show_current(session, output);
        }
        Input::Category(category) => {
            session.set_category(category);
            show_current(session, output);
        }
        Input::Add => {
            if session.add_current_to_cart().is_none() {
                output.warn("Nothing selected");
            }
        }
        Input::Increment(id) => match session.catalog().get(&id).cloned() {
            Some(item) => {
                session.cart_mut().add_item(&item);
            }
            None => output.warn(&format!("Unknown item: {}", id)),
        },
        Input::Decrement(id) => {
            let quantity = session.cart().cart().quantity_of(&id);
            session.cart_mut().set_quantity(&id, quantity - 1);
        }
        Input::Remove(id) => {
            session.cart_mut().remove_item(&id);
        }
        Input::Clear => {
            session.cart_mut().clear();
        }
        Input::ShowCart => {
            let store = session.cart();
            output.cart(store.cart(), store.parser());
        }
        Input::Help | Input::Done | Input::Quit => {}
    }
}

fn show_current(session: &MenuSession, output: &Output) {
    let nav = session.navigation();
    match session.current_item() {
        Some(item) => {
            output.item_card(item, nav.active_index, nav.count);
            let arrow = match nav.direction {
                Direction::Backward => "←",
                Direction::Still => "·",
                Direction::Forward => "→",
            };
            output.debug(&format!(
                "{} prev={} next={}",
                arrow,
                nav.has_prev(),
                nav.has_next()
            ));
        }
        None => output.info("No results"),
    }
}

fn prompt<W: Write>(term: &mut W, output: &Output) -> io::Result<()> {
    if output.is_json() {
        return Ok(());
    }
    write!(term, "> ")?;
    term.flush()
}
