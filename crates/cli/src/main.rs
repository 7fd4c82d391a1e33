//! Atelier CLI - cart inspection and form demo tools.
//!
//! # Usage
//!
//! ```bash
//! # Show the persisted cart
//! atelier-cli cart show
//!
//! # Add the configured product (quantity 2)
//! atelier-cli cart add -q 2
//!
//! # Remove the first entry
//! atelier-cli cart remove 0
//!
//! # Empty the cart
//! atelier-cli cart clear
//!
//! # Drive a contact submission through the simulated endpoint
//! atelier-cli submit contact -n Ada -s Rossi -e ada@example.com -m "Hello"
//! ```
//!
//! # Commands
//!
//! - `cart` - Inspect and mutate the file-persisted cart
//! - `submit` - Validate and submit a form against the simulated endpoint
//!
//! # Environment Variables
//!
//! - `ATELIER_PAGE_CONFIG` - Path to the page context JSON (falls back to
//!   a built-in demo context)
//! - `ATELIER_CART_PATH` - Path of the cart snapshot file
//!   (default: `atelier-cart.json`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "atelier-cli")]
#[command(author, version, about = "Atelier CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and mutate the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Validate and submit a form against the simulated endpoint
    Submit {
        #[command(subcommand)]
        form: SubmitForm,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart contents and totals
    Show,
    /// Add the configured product to the cart
    Add {
        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove the entry at the given position
    Remove {
        /// Zero-based entry index
        index: usize,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum SubmitForm {
    /// Submit the contact form
    Contact {
        /// First name
        #[arg(short, long)]
        name: String,

        /// Surname
        #[arg(short, long)]
        surname: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Message body
        #[arg(short, long)]
        message: String,
    },
    /// Submit the commission form
    Commission {
        /// Full name
        #[arg(short, long)]
        fullname: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Shipping address
        #[arg(short, long)]
        address: String,

        /// Requested canvas size
        #[arg(short, long)]
        size: String,

        /// Commission description
        #[arg(short, long)]
        description: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show()?,
            CartAction::Add { quantity } => commands::cart::add(quantity)?,
            CartAction::Remove { index } => commands::cart::remove(index)?,
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Submit { form } => match form {
            SubmitForm::Contact {
                name,
                surname,
                email,
                message,
            } => {
                commands::submit::contact(&name, &surname, &email, &message).await?;
            }
            SubmitForm::Commission {
                fullname,
                email,
                address,
                size,
                description,
            } => {
                commands::submit::commission(&fullname, &email, &address, &size, &description)
                    .await?;
            }
        },
    }
    Ok(())
}
