use clap::{Parser, Subcommand};

use karat_client::{ProductQueries, ProductsQuery, ShopApiClient};

#[derive(Debug, Parser)]
#[command(name = "karat-cli")]
#[command(about = "Query the karat catalogue API")]
struct Cli {
    /// Base URL of a running karat server.
    #[arg(long, env = "KARAT_API_BASE_URL", default_value = "http://localhost:3001")]
    api_base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products, optionally narrowed by price/popularity bounds.
    List {
        #[arg(long)]
        min_price: Option<f64>,
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(long)]
        min_popularity: Option<f64>,
        #[arg(long)]
        max_popularity: Option<f64>,
    },
    /// Fetch a single product by its positional id.
    Get { id: u32 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let client = ShopApiClient::new(&cli.api_base_url, 30)?;
    let queries = ProductQueries::new(client);

    match cli.command {
        Commands::List {
            min_price,
            max_price,
            min_popularity,
            max_popularity,
        } => {
            let query = ProductsQuery {
                min_price,
                max_price,
                min_popularity,
                max_popularity,
                ..ProductsQuery::default()
            };
            let products = queries.products(&query).await?;
            println!("{}", serde_json::to_string_pretty(&products)?);
            tracing::info!(count = products.len(), "listed products");
        }
        Commands::Get { id } => match queries.product(id).await? {
            Some(product) => println!("{}", serde_json::to_string_pretty(&product)?),
            None => {
                tracing::warn!(id, "product not found");
                println!("product {id} not found");
            }
        },
    }

    Ok(())
}
