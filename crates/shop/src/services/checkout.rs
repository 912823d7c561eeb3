//! The checkout loop.
//!
//! A menu-driven state machine over explicit state: the authenticated
//! session, the catalog stock, and the cart. Commands are dispatched from
//! a single prompt; every side conversation (cart view, purchase confirm,
//! logout confirm) returns to browsing.
//!
//! The wallet is only ever mutated inside a confirmed, sufficiently funded
//! purchase, and each completed purchase persists through the user store
//! exactly once.

use rust_decimal::Decimal;

use corner_market_core::money;

use crate::cart::ShoppingCart;
use crate::models::{Product, Session};
use crate::store::{StoreError, UserStore};
use crate::ui::Console;

const MENU_PROMPT: &str =
    "\nEnter a product number to add, or d (display), c (cart), co (checkout), l (logout): ";
const INVALID_INPUT: &str = "Invalid input. Please try again.";

/// Everything the checkout loop owns, threaded explicitly.
#[derive(Debug)]
pub struct CheckoutState {
    /// The authenticated user and their working wallet balance.
    pub session: Session,
    /// Catalog products with remaining stock, in catalog order.
    pub catalog: Vec<Product>,
    /// The cart for this session.
    pub cart: ShoppingCart,
}

impl CheckoutState {
    /// Start a checkout loop state with an empty cart.
    #[must_use]
    pub const fn new(session: Session, catalog: Vec<Product>) -> Self {
        Self {
            session,
            catalog,
            cart: ShoppingCart::new(),
        }
    }
}

/// One parsed menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    DisplayProducts,
    ViewCart,
    Checkout,
    Logout,
    Select(usize),
    Unknown,
}

fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "d" | "display" => Command::DisplayProducts,
        "c" | "cart" => Command::ViewCart,
        "co" | "checkout" => Command::Checkout,
        "l" | "logout" => Command::Logout,
        other => other.parse::<usize>().map_or(Command::Unknown, Command::Select),
    }
}

/// Run the checkout loop until the user confirms a logout.
///
/// # Errors
///
/// Returns `StoreError` if persisting a completed purchase fails.
pub fn run(
    state: &mut CheckoutState,
    store: &UserStore,
    console: &mut dyn Console,
) -> Result<(), StoreError> {
    loop {
        let input = console.prompt(MENU_PROMPT);
        match parse_command(&input) {
            Command::DisplayProducts => display_products(state, console),
            Command::Select(number) => select_product(state, number, console),
            Command::ViewCart => view_cart(state, console),
            Command::Checkout => confirm_purchase(state, store, console)?,
            Command::Logout => {
                if confirm_logout(state, console) {
                    console.say("You have been logged out.");
                    tracing::debug!(user = %state.session.username, "logged out");
                    return Ok(());
                }
            }
            Command::Unknown => console.say(INVALID_INPUT),
        }
    }
}

fn listing_line(index: usize, name: &str, price: Decimal, units: u64) -> String {
    format!(
        "{index}. {name} - ${} - Units: {units}",
        money::display_amount(price)
    )
}

fn display_products(state: &CheckoutState, console: &mut dyn Console) {
    console.say("\nAvailable products for purchase:");
    for (i, product) in state.catalog.iter().enumerate() {
        console.say(&listing_line(
            i + 1,
            &product.name,
            product.price,
            product.units,
        ));
    }
}

fn say_cart_items(state: &CheckoutState, console: &mut dyn Console) {
    for (i, item) in state.cart.retrieve_items().iter().enumerate() {
        console.say(&listing_line(i + 1, &item.name, item.price, item.quantity));
    }
}

/// Move one unit of the selected product from the catalog to the cart.
fn select_product(state: &mut CheckoutState, number: usize, console: &mut dyn Console) {
    let Some(product) = number
        .checked_sub(1)
        .and_then(|i| state.catalog.get_mut(i))
    else {
        console.say(INVALID_INPUT);
        return;
    };
    if product.units == 0 {
        console.say(&format!("Sorry, {} is out of stock.", product.name));
        return;
    }
    product.units -= 1;
    let (name, price) = (product.name.clone(), product.price);
    state.cart.add_item(&name, price, 1);
    console.say(&format!("{name} added to your cart."));
}

/// Show the cart; offer to remove one line, restoring its units.
fn view_cart(state: &mut CheckoutState, console: &mut dyn Console) {
    loop {
        console.say("\nItems in the cart:");
        say_cart_items(state, console);
        if state.cart.is_empty() {
            return;
        }

        let answer = console.prompt("Do you want to remove an item? (y/n): ");
        if !answer.trim().eq_ignore_ascii_case("y") {
            return;
        }

        let index_input = console.prompt("Enter the number of the item to remove: ");
        let removed = index_input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| state.cart.remove_item(index));
        match removed {
            Some(line) => {
                restore_units(&mut state.catalog, &line.name, line.quantity);
                console.say(&format!("{} removed from your cart.", line.name));
                return;
            }
            // Stay in the cart view: re-list and ask again.
            None => console.say(INVALID_INPUT),
        }
    }
}

fn restore_units(catalog: &mut [Product], name: &str, quantity: u64) {
    if let Some(product) = catalog.iter_mut().find(|p| p.name == name) {
        product.units = product.units.saturating_add(quantity);
    }
}

/// Confirm and settle a purchase: funds check, wallet debit, one persist,
/// cart cleared.
fn confirm_purchase(
    state: &mut CheckoutState,
    store: &UserStore,
    console: &mut dyn Console,
) -> Result<(), StoreError> {
    if state.cart.is_empty() {
        return Ok(());
    }

    let answer = console.prompt("Do you want to confirm the purchase? (y/n): ");
    if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(());
    }

    let total = state.cart.get_total_price();
    if state.session.wallet < total {
        console.say("You don't have enough money to complete the purchase. Please try again!");
        return Ok(());
    }

    state.session.wallet -= total;
    store.update_wallet(state.session.username.as_str(), state.session.wallet)?;
    state.cart.clear();
    tracing::debug!(
        user = %state.session.username,
        total = %total,
        balance = %state.session.wallet,
        "purchase completed"
    );
    console.say(&format!(
        "Thank you for your purchase, {}! Your remaining balance is {}",
        state.session.username,
        money::display_amount(state.session.wallet)
    ));
    Ok(())
}

/// Ask before leaving; a non-empty cart is shown first and is discarded on
/// a confirmed logout.
fn confirm_logout(state: &CheckoutState, console: &mut dyn Console) -> bool {
    if !state.cart.is_empty() {
        console.say("Your cart is not empty. You have the following items:");
        say_cart_items(state, console);
    }
    let answer = console.prompt("Are you sure you want to log out? (y/n): ");
    answer.trim().eq_ignore_ascii_case("y")
}
