//! Corner Market - interactive shopping cart.
//!
//! # Usage
//!
//! ```bash
//! # Run against the default files/ directory
//! corner-market
//!
//! # Point at specific store files
//! corner-market --users /data/users.json --products /data/products.csv
//! ```
//!
//! Logs in (or registers) a user against the JSON user store, then runs the
//! checkout loop over the CSV product catalog. Quitting at a login prompt
//! or confirming a logout exits with status 0; a missing store file is
//! fatal and exits nonzero.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::Parser;

use corner_market_shop::config::ShopConfig;
use corner_market_shop::error;
use corner_market_shop::services::checkout::{self, CheckoutState};
use corner_market_shop::services::login::{self, LoginFlowOutcome};
use corner_market_shop::store::{self, UserStore};
use corner_market_shop::ui::TerminalConsole;

#[derive(Parser)]
#[command(name = "corner-market")]
#[command(author, version, about = "Interactive shopping cart over a JSON user store")]
struct Cli {
    /// Path to the user store JSON file
    #[arg(long, value_name = "PATH")]
    users: Option<PathBuf>,

    /// Path to the product catalog CSV file
    #[arg(long, value_name = "PATH")]
    products: Option<PathBuf>,
}

fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Session failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let config = ShopConfig::load(cli.users, cli.products)?;
    let store = UserStore::new(&config.users_file);
    let catalog = store::load_products(&config.products_file)?;
    let mut console = TerminalConsole::new();

    match login::login_or_register(&store, &mut console)? {
        LoginFlowOutcome::Quit => Ok(()),
        LoginFlowOutcome::Session(session) => {
            let mut state = CheckoutState::new(session, catalog);
            checkout::run(&mut state, &store, &mut console)?;
            Ok(())
        }
    }
}
