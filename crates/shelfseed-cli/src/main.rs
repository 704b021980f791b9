mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use shelfseed_core::{DbConfig, Error as CoreError};
use shelfseed_generate::GenerateError;

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "shelfseed",
    version,
    about = "Seed a library-management database with sample data"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reset the schema and load lookup, member, and catalog rows.
    Seed(SeedArgs),
    /// Generate random transactional rows and bulk-load them.
    Transactions(TransactionsArgs),
    /// Export table previews and row counts for inspection.
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
struct SeedArgs {
    /// Directory holding the input CSVs and the lookup fixture.
    #[arg(long, default_value = "seed/input")]
    input_dir: PathBuf,
}

#[derive(Args, Debug)]
struct TransactionsArgs {
    /// Directory the generated CSVs are written to.
    #[arg(long, default_value = "seed/generated")]
    out_dir: PathBuf,
    /// Fixed RNG seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    /// Directory previews and row counts are written to.
    #[arg(long, default_value = "seed/output")]
    out_dir: PathBuf,
    /// Rows exported per table preview.
    #[arg(long, default_value_t = 10)]
    limit: i64,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    init_logging();

    let cli = Cli::parse();

    // Read the environment exactly once; everything downstream takes the
    // explicit configuration value.
    let config = DbConfig::from_env()?;
    let pool = shelfseed_db::connect(&config).await?;

    match cli.command {
        Command::Seed(args) => commands::run_seed(&pool, &args.input_dir).await,
        Command::Transactions(args) => {
            commands::run_transactions(&pool, &args.out_dir, args.seed).await
        }
        Command::Preview(args) => commands::run_preview(&pool, &args.out_dir, args.limit).await,
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
