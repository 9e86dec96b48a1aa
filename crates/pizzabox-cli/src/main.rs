use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod order;

#[derive(Debug, Parser)]
#[command(name = "pizzabox")]
#[command(about = "Find a store, price an order, place it, and track it")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find the store that delivers to an address
    Store {
        #[arg(long)]
        street: String,
        #[arg(long)]
        postal_code: String,
    },
    /// Show a store's menu summary and current 50%-off coupon
    Menu {
        #[arg(long)]
        store_id: String,
    },
    /// Price an order without placing it
    Price {
        /// YAML order file; replaces --street, --postal-code, and --product
        #[arg(long, conflicts_with_all = ["street", "postal_code", "products"])]
        order_file: Option<PathBuf>,
        #[arg(long, required_unless_present = "order_file")]
        street: Option<String>,
        #[arg(long, required_unless_present = "order_file")]
        postal_code: Option<String>,
        /// Variant code, e.g. 14SCREEN (repeatable)
        #[arg(long = "product", required_unless_present = "order_file")]
        products: Vec<String>,
        /// Add the store's 50%-off coupon when it has one
        #[arg(long)]
        fifty_percent_coupon: bool,
    },
    /// Price and then place an order from a YAML order file
    Place {
        #[arg(long)]
        order_file: PathBuf,
        /// Required; without it the order is only priced
        #[arg(long)]
        confirm: bool,
    },
    /// Show the status of the latest order for a phone number
    Track {
        #[arg(long)]
        phone: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = pizzabox_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("pizzabox: no command given; try `pizzabox store --help`");
        return Ok(());
    };

    let client = commands::build_client(&config)?;

    match command {
        Commands::Store {
            street,
            postal_code,
        } => commands::run_store(&client, &street, &postal_code).await?,
        Commands::Menu { store_id } => commands::run_menu(&client, &store_id).await?,
        Commands::Price {
            order_file,
            street,
            postal_code,
            products,
            fifty_percent_coupon,
        } => {
            let draft = match order_file {
                Some(path) => order::OrderDraft::from_file(&path)?,
                None => order::OrderDraft::from_args(
                    street.unwrap_or_default(),
                    postal_code.unwrap_or_default(),
                    &products,
                    fifty_percent_coupon,
                )?,
            };
            commands::run_price(&client, draft).await?;
        }
        Commands::Place {
            order_file,
            confirm,
        } => {
            let draft = order::OrderDraft::from_file(&order_file)?;
            commands::run_place(&client, draft, confirm).await?;
        }
        Commands::Track { phone } => commands::run_track(&client, &phone).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
