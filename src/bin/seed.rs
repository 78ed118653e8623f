use clap::Parser;
use mealcart::{
    config::{DatabaseArgs, init_logging},
    controllers::{sample_recipes, seed_database},
};
use tracing::info;

/// Replace the recipe catalog with the built-in sample recipes
#[derive(Parser)]
#[command(name = "mealcart-seed")]
struct Cli {
    #[command(flatten)]
    database: DatabaseArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging("info");

    let pool = cli.database.connect().await?;
    let inserted = seed_database(&pool, &sample_recipes()).await?;
    info!(inserted, "database seeding complete");

    Ok(())
}
