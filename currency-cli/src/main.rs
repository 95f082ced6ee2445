//! Currency CLI
//!
//! Command-line interface for the Currency Exchange API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use currency_client::CurrencyClient;
use currency_types::{CurrencyCode, CurrencyPair};

#[derive(Parser)]
#[command(name = "currency")]
#[command(author, version, about = "Currency Exchange API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Currency Exchange API
    #[arg(
        long,
        env = "CURRENCY_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Currency operations
    Currency {
        #[command(subcommand)]
        action: CurrencyCommands,
    },
    /// Exchange rate operations
    Rate {
        #[command(subcommand)]
        action: RateCommands,
    },
    /// Convert an amount using the stored rate
    Convert {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: f64,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum CurrencyCommands {
    /// Create a new currency
    Create {
        /// Currency code (e.g. USD)
        code: String,
        /// Full name
        #[arg(long)]
        name: String,
        /// Sign (e.g. $)
        #[arg(long)]
        sign: String,
    },
    /// Get currency details
    Get {
        /// Currency code
        code: String,
    },
    /// List all currencies
    List,
}

#[derive(Subcommand)]
enum RateCommands {
    /// Create the rate for a pair
    Create {
        #[arg(long)]
        base: String,
        #[arg(long)]
        target: String,
        #[arg(long)]
        rate: f64,
    },
    /// Get the rate for a pair
    Get {
        /// Pair such as USDEUR or USD-EUR
        pair: String,
    },
    /// Change the rate of an existing pair
    Update {
        /// Pair such as USDEUR or USD-EUR
        pair: String,
        #[arg(long)]
        rate: f64,
    },
    /// List all exchange rates
    List,
}

fn parse_code(s: &str) -> Result<CurrencyCode> {
    Ok(CurrencyCode::new(s)?)
}

fn parse_pair(s: &str) -> Result<CurrencyPair> {
    Ok(CurrencyPair::from_path(s)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = CurrencyClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Currency { action } => match action {
            CurrencyCommands::Create { code, name, sign } => {
                let code = parse_code(&code)?;
                let created = client.create_currency(code.as_str(), &name, &sign).await?;
                println!("{}", serde_json::to_string_pretty(&created)?);
            }
            CurrencyCommands::Get { code } => {
                let code = parse_code(&code)?;
                let currency = client.get_currency(code.as_str()).await?;
                println!("{}", serde_json::to_string_pretty(&currency)?);
            }
            CurrencyCommands::List => {
                let currencies = client.list_currencies().await?;
                println!("{}", serde_json::to_string_pretty(&currencies)?);
            }
        },

        Commands::Rate { action } => match action {
            RateCommands::Create { base, target, rate } => {
                let pair = CurrencyPair::new(parse_code(&base)?, parse_code(&target)?);
                let created = client
                    .create_exchange_rate(pair.base.as_str(), pair.target.as_str(), rate)
                    .await?;
                println!("{}", serde_json::to_string_pretty(&created)?);
            }
            RateCommands::Get { pair } => {
                let pair = parse_pair(&pair)?;
                let rate = client
                    .get_exchange_rate(pair.base.as_str(), pair.target.as_str())
                    .await?;
                println!("{}", serde_json::to_string_pretty(&rate)?);
            }
            RateCommands::Update { pair, rate } => {
                let pair = parse_pair(&pair)?;
                let updated = client
                    .update_exchange_rate(pair.base.as_str(), pair.target.as_str(), rate)
                    .await?;
                println!("{}", serde_json::to_string_pretty(&updated)?);
            }
            RateCommands::List => {
                let rates = client.list_exchange_rates().await?;
                println!("{}", serde_json::to_string_pretty(&rates)?);
            }
        },

        Commands::Convert { from, to, amount } => {
            let pair = CurrencyPair::new(parse_code(&from)?, parse_code(&to)?);
            let conversion = client
                .convert(pair.base.as_str(), pair.target.as_str(), amount)
                .await?;
            println!("{}", serde_json::to_string_pretty(&conversion)?);
        }
    }

    Ok(())
}
