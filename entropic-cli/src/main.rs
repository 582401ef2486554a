//! Entropic CLI - browse the storefront from a terminal
//!
//! # Commands
//!
//! ```bash
//! # List products, filtered and sorted like the product grid
//! entropic products --query shoe --category Sports --sort price-low
//!
//! # Keep a cart between invocations
//! entropic --cart-file cart.json cart add 4
//! entropic --cart-file cart.json cart show
//!
//! # Talk to the shopping assistant
//! entropic chat "any headphones under $400?"
//! ```

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use entropic_lib::{
    cart::{Cart, CartSnapshot},
    catalog::{MemoryCatalog, Product, ProductStore},
    chat::{KeywordResponder, Responder},
    register::RegistrationForm,
    search::{CategoryFilter, FilterState, SearchEngine, SortMode},
    session::Session,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "entropic")]
#[command(about = "Browse the Entropic storefront catalog")]
#[command(version)]
struct Cli {
    /// JSON catalog to load instead of the built-in sample
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Keep the cart in this file between runs
    #[arg(long, global = true)]
    cart_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching a search
    Products {
        /// Text to look for in names and descriptions
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category label, or "All"
        #[arg(short, long, default_value = "All")]
        category: CategoryFilter,

        /// relevance, price-low or price-high
        #[arg(short, long, default_value = "relevance")]
        sort: SortMode,

        /// Results to skip
        #[arg(long, default_value = "0")]
        skip: usize,

        /// Maximum results to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List category labels
    Categories,

    /// Catalog totals and price range
    Summary,

    /// Inspect or change the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },

    /// Ask the shopping assistant (interactive when no message is given)
    Chat {
        message: Option<String>,
    },

    /// Validate and submit a registration
    ///
    /// The password is read from ENTROPIC_PASSWORD or prompted for on stdin.
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product
    Add {
        id: u32,
        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },
    /// Remove a product's line
    Remove { id: u32 },
    /// Set a line's quantity (0 or less removes it)
    Set {
        id: u32,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Show cart contents and totals
    Show,
    /// Empty the cart
    Clear,
}

const PASSWORD_VAR: &str = "ENTROPIC_PASSWORD";
const CONFIRM_PASSWORD_VAR: &str = "ENTROPIC_CONFIRM_PASSWORD";

/// Take a secret from the environment, or prompt for one line of input.
fn read_secret(from_env: Option<String>, prompt: &str, input: &mut impl BufRead) -> Result<String> {
    if let Some(secret) = from_env {
        return Ok(secret);
    }

    eprint!("{prompt}");
    std::io::stderr().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("no input for {}", prompt.trim_end_matches([':', ' ']));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Password and confirmation for `register`, never taken from the command line.
fn read_passwords(
    password_env: Option<String>,
    confirm_env: Option<String>,
    input: &mut impl BufRead,
) -> Result<(String, String)> {
    let from_env = password_env.is_some();
    let password = read_secret(password_env, "Password: ", input)?;
    let confirm = match confirm_env {
        Some(confirm) => confirm,
        None if from_env => password.clone(),
        None => read_secret(None, "Confirm password: ", input)?,
    };
    Ok((password, confirm))
}

fn load_catalog(path: Option<&Path>) -> Result<MemoryCatalog> {
    Ok(match path {
        Some(path) => MemoryCatalog::load(path)?,
        None => MemoryCatalog::sample(),
    })
}

fn open_session(
    catalog: MemoryCatalog,
    cart_file: Option<&Path>,
) -> Result<Session<MemoryCatalog>> {
    let cart = match cart_file {
        Some(path) => Cart::from_snapshot(&CartSnapshot::load(path)?, &catalog),
        None => Cart::new(),
    };
    Ok(Session::with_cart(catalog, cart))
}

fn print_product(product: &Product) {
    let stock = if product.in_stock() { "" } else { "  (out of stock)" };
    println!(
        "{:>4}  {:<32} {:<16} ${:>9.2}{stock}",
        product.id, product.name, product.category, product.price
    );
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Your cart is empty");
        return;
    }
    for line in cart.lines() {
        println!(
            "{:>4}  {:<32} x{:<3} ${:>9.2}",
            line.product.id,
            line.product.name,
            line.quantity,
            line.subtotal()
        );
    }
    println!("---");
    println!("{} items, total ${:.2}", cart.total_items(), cart.total_price());
}

fn run_cart(
    session: &mut Session<MemoryCatalog>,
    action: CartAction,
    cart_file: Option<&Path>,
) -> Result<()> {
    let changed = match action {
        CartAction::Add { id, quantity } => {
            session.add_quantity(id, quantity)?;
            true
        }
        CartAction::Remove { id } => {
            session.cart_mut().remove_from_cart(id);
            true
        }
        CartAction::Set { id, quantity } => {
            session.cart_mut().update_quantity(id, quantity);
            true
        }
        CartAction::Clear => {
            session.cart_mut().clear();
            true
        }
        CartAction::Show => false,
    };

    print_cart(session.cart());

    if changed {
        match cart_file {
            Some(path) => session.cart().snapshot().save(path)?,
            None => warn!("No --cart-file given; cart changes end with this command"),
        }
    }
    Ok(())
}

async fn run_chat<R: Responder>(responder: &R, message: Option<String>) -> Result<()> {
    if let Some(message) = message {
        println!("{}", responder.reply(&message).message);
        return Ok(());
    }

    println!("Entropic assistant - type 'quit' to leave");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if matches!(line, "quit" | "exit") {
            break;
        }
        if line.is_empty() {
            continue;
        }
        println!("{}\n", responder.reply(line).message);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Products {
            query,
            category,
            sort,
            skip,
            limit,
        } => {
            let engine = SearchEngine::new(catalog);
            let filter = FilterState::new(query, category, sort);
            let page = engine.search_page(&filter, skip, limit);

            for product in &page.items {
                print_product(product);
            }
            println!(
                "\nShowing {} of {} products (sorted by {})",
                page.items.len(),
                page.total,
                filter.sort_mode
            );
        }

        Commands::Categories => {
            for label in catalog.categories() {
                println!("{label}");
            }
        }

        Commands::Summary => {
            let summary = catalog.summary();
            println!("Products:   {}", summary.total_products);
            println!("Categories: {}", summary.categories);
            println!("In stock:   {}", summary.in_stock);
            if let (Some(min), Some(max)) = (summary.min_price, summary.max_price) {
                println!("Prices:     ${min:.2} - ${max:.2}");
            }
        }

        Commands::Cart { action } => {
            let cart_file = cli.cart_file.as_deref();
            let mut session = open_session(catalog, cart_file)?;
            run_cart(&mut session, action, cart_file)?;
        }

        Commands::Chat { message } => {
            let engine = SearchEngine::new(catalog);
            let responder = KeywordResponder::new(&engine);
            run_chat(&responder, message).await?;
        }

        Commands::Register {
            first_name,
            last_name,
            email,
        } => {
            let (password, confirm_password) = read_passwords(
                std::env::var(PASSWORD_VAR).ok(),
                std::env::var(CONFIRM_PASSWORD_VAR).ok(),
                &mut std::io::stdin().lock(),
            )?;
            let form = RegistrationForm {
                first_name,
                last_name,
                email,
                password,
                confirm_password,
            };
            let registration = form.validate()?;
            registration.submit();
            println!(
                "Thanks for registering, {} ({})",
                registration.first_name, registration.email
            );
        }
    }

    Ok(())
}
